//! Test that `crate("name")` lets the macro find a renamed `efi_guid`
use efi_guid as NotGuid;
use NotGuid::{extra::Entity, known, GUID};

#[GUID("9042A9DE-23DC-4A38-96FB-7ADED080516A", crate("NotGuid"))]
struct Gop;

// Raw and generic types work too
#[GUID("09576e92-6d3f-11d2-8e39-00a0c969723b", crate("NotGuid"))]
struct r#FileInfo<'a, T> {
    _data: &'a T,
}

fn main() {
    assert_eq!(Gop::GUID, known::GRAPHICS_OUTPUT_PROTOCOL);
    assert!(Gop::is(&known::GRAPHICS_OUTPUT_PROTOCOL));

    assert_eq!(<FileInfo<u8> as Entity>::GUID, known::FILE_INFO_ID);
    assert_eq!(<FileInfo<u8> as Entity>::NAME, "FileInfo");
}
