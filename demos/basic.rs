//! Basic canonicalization: alphabetize keys and stabilize sibling order.
//!
//! Run with: cargo run --example basic

use canonxml::format;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<Profile xmlns=\"http://soap.sforce.com/2006/04/metadata\">\n\
  <userLicense>Salesforce</userLicense>\n\
  <classAccesses>\n\
    <enabled>true</enabled>\n\
    <apexClass>OrderService</apexClass>\n\
  </classAccesses>\n\
  <classAccesses>\n\
    <apexClass>AccountService</apexClass>\n\
    <enabled>false</enabled>\n\
  </classAccesses>\n\
  <custom>true</custom>\n\
</Profile>\n";

    println!("Input:\n{xml}");

    let formatted = format(xml)?;
    println!("Canonical:\n{formatted}");

    // Formatting again changes nothing.
    assert_eq!(formatted, format(&formatted)?);
    println!("✓ Output is a fixed point");

    Ok(())
}
