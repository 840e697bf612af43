#[test]
fn guid() {
    let t = trybuild::TestCases::new();
    t.pass("tests/guid/pass/*.rs");
}
