//! Test that the GUID macro basic features works correctly
use efi_guid::{extra::Entity, Guid, GUID};

// Random UUID from `uuidgen`
const GUID: &str = "c986ec27-af54-4b55-80aa-91697fcdf8eb";

#[GUID("c986ec27-af54-4b55-80aa-91697fcdf8eb")]
struct HasID;

fn main() {
    let expected: Guid = GUID.parse().unwrap();
    assert_eq!(HasID::GUID, expected, "GUID macro didn't do GUID correctly");
    assert_eq!(<HasID as Entity>::GUID, expected);
    assert_eq!(HasID::guid().data1(), 0xc986ec27);
    assert_eq!(HasID::guid().data2(), 0xaf54);
    assert_eq!(HasID::guid().data3(), 0x4b55);
    assert_eq!(
        HasID::guid().data4(),
        [0x80, 0xaa, 0x91, 0x69, 0x7f, 0xcd, 0xf8, 0xeb]
    );

    assert_eq!(HasID::NAME, "HasID", "GUID macro didn't do NAME correctly");
}
