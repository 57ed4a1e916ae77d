//! One test per canonical-form rule, at the public-API level.

use canonxml::{
    canonicalize, escape, fingerprint, format, xml, FormatOptions, IndentUnit, SortKeyTable,
};

#[test]
fn mapping_keys_render_alphabetically() {
    let formatted = format("<m><b>1</b><a>2</a></m>").unwrap();
    assert_eq!(
        formatted,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<m>\n    <a>2</a>\n    <b>1</b>\n</m>\n"
    );
}

#[test]
fn repeated_siblings_order_by_identity() {
    let xml_text = "<list>\
<item><name>z</name></item>\
<item><name>a</name></item>\
<item><name>m</name></item>\
</list>";
    let formatted = format(xml_text).unwrap();
    let a = formatted.find("<name>a</name>").unwrap();
    let m = formatted.find("<name>m</name>").unwrap();
    let z = formatted.find("<name>z</name>").unwrap();
    assert!(a < m && m < z);
}

#[test]
fn override_entry_decides_order_alone() {
    let options = FormatOptions::new().with_mapped_key("fields", ["fullName"]);
    let tree = xml!({
        "fields": [
            {"fullName": "beta", "label": "aaa"},
            {"fullName": "alpha", "label": "zzz"},
        ]
    });
    let canonical = canonicalize(&tree, &options);
    let fields = canonical.as_mapping().unwrap().get("fields").unwrap();
    let order: Vec<_> = fields
        .as_list()
        .unwrap()
        .iter()
        .map(|f| {
            f.as_mapping()
                .unwrap()
                .get("fullName")
                .unwrap()
                .as_str()
                .unwrap()
        })
        .collect();
    assert_eq!(order, vec!["alpha", "beta"]);
}

#[test]
fn exclusion_preserves_subtree_verbatim() {
    let options = FormatOptions::new().with_unmapped_key("steps");
    let tree = xml!({
        "steps": [{"Zed": "1", "Abc": "2"}, {"k": "3"}],
        "other": [{"b": "1", "a": "2"}],
    });
    let canonical = canonicalize(&tree, &options);
    let map = canonical.as_mapping().unwrap();

    // Excluded: untouched, even key casing/order inside.
    assert_eq!(
        map.get("steps").unwrap(),
        &xml!([{"Zed": "1", "Abc": "2"}, {"k": "3"}])
    );
    // Not excluded: keys alphabetized.
    let other_keys: Vec<_> = map.get("other").unwrap().as_list().unwrap()[0]
        .as_mapping()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(other_keys, vec!["a", "b"]);
}

#[test]
fn fingerprints_follow_the_documented_layout() {
    let table = SortKeyTable::new();
    assert_eq!(fingerprint("item", &xml!({"name": "a"}), &table), "item:name:a");
    assert_eq!(fingerprint("f", &xml!("v"), &table), "f:v");
    assert_eq!(fingerprint("f", &xml!(["a", "b"]), &table), "f:f:a,f:b");
    assert_eq!(
        fingerprint("f", &xml!({"x": "1", "y": "2"}), &table),
        "f:x:1|y:2"
    );
}

#[test]
fn fingerprint_equal_for_deep_equal_trees() {
    let table = SortKeyTable::new();
    let a = xml!({"n": {"inner": ["1", "2"]}, "t": "x"});
    let b = xml!({"n": {"inner": ["1", "2"]}, "t": "x"});
    assert_eq!(fingerprint("e", &a, &table), fingerprint("e", &b, &table));
}

#[test]
fn canonicalization_is_a_fixed_point() {
    let tree = xml!({
        "root": {
            "group": [{"b": "2", "a": "1"}, {"a": "0"}],
            "leaf": "v",
        }
    });
    let options = FormatOptions::new();
    let once = canonicalize(&tree, &options);
    assert_eq!(canonicalize(&once, &options), once);
}

#[test]
fn escaper_rules() {
    // & and ' escaped; < and > restored; " untouched.
    assert_eq!(escape("a & b"), "a &amp; b\n");
    assert_eq!(escape("it's"), "it&apos;s\n");
    assert_eq!(escape("<tag>1 < 2</tag>"), "<tag>1 < 2</tag>\n");
    assert_eq!(escape("say \"hi\""), "say \"hi\"\n");
}

#[test]
fn indent_inference_matrix() {
    assert_eq!(
        IndentUnit::infer("<r>\n  <a/>\n</r>"),
        IndentUnit::Spaces(2)
    );
    assert_eq!(IndentUnit::infer("<r>\n\t<a/>\n</r>"), IndentUnit::Tabs(1));
    assert_eq!(IndentUnit::infer("<r><a/></r>"), IndentUnit::Spaces(4));
}

#[test]
fn two_space_source_renders_two_space_output() {
    let formatted = format("<r>\n  <b/>\n  <a/>\n</r>").unwrap();
    assert_eq!(
        formatted,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<r>\n  <a/>\n  <b/>\n</r>\n"
    );
}
