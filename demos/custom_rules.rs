//! Sort-key overrides and exclusions.
//!
//! Run with: cargo run --example custom_rules

use canonxml::{format_with_options, FormatOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let xml = "<CustomObject>\n\
  <fields>\n\
    <fullName>Priority__c</fullName>\n\
    <label>Zz Priority</label>\n\
  </fields>\n\
  <fields>\n\
    <fullName>Category__c</fullName>\n\
    <label>Aa Category</label>\n\
  </fields>\n\
  <values>\n\
    <fullName>High</fullName>\n\
  </values>\n\
  <values>\n\
    <fullName>Low</fullName>\n\
  </values>\n\
</CustomObject>\n";

    // `fields` elements are identified by <fullName> alone; `values` keep
    // their authored order.
    let options = FormatOptions::new()
        .with_mapped_key("fields", ["fullName"])
        .with_unmapped_key("values");

    println!("Canonical:\n{}", format_with_options(xml, &options)?);

    // The ready-made Salesforce rule set covers the common metadata types.
    let salesforce = FormatOptions::salesforce();
    println!(
        "Salesforce preset orders fieldPermissions by: {:?}",
        salesforce.mapped_keys["fieldPermissions"]
    );

    Ok(())
}
