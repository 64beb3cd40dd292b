//! Low-level emission of canonical CBOR item headers.

/// Major type for unsigned integers.
pub(crate) const MAJOR_UNSIGNED: u8 = 0;
/// Major type for text strings.
pub(crate) const MAJOR_TEXT: u8 = 3;
/// Major type for arrays.
pub(crate) const MAJOR_ARRAY: u8 = 4;
/// Major type for maps.
pub(crate) const MAJOR_MAP: u8 = 5;

/// Write a major-type header with its argument in shortest form.
///
/// Arguments below 24 pack into the initial byte; larger ones use the
/// smallest of the 1/2/4/8-byte big-endian widths. This is the only
/// argument encoding the canonical format permits — a wider-than-necessary
/// width would be a second valid encoding of the same value.
pub(crate) fn write_header(out: &mut Vec<u8>, major: u8, argument: u64) {
    let tag = major << 5;
    if argument < 24 {
        out.push(tag | argument as u8);
    } else if argument <= u8::MAX as u64 {
        out.push(tag | 24);
        out.push(argument as u8);
    } else if argument <= u16::MAX as u64 {
        out.push(tag | 25);
        out.extend_from_slice(&(argument as u16).to_be_bytes());
    } else if argument <= u32::MAX as u64 {
        out.push(tag | 26);
        out.extend_from_slice(&(argument as u32).to_be_bytes());
    } else {
        out.push(tag | 27);
        out.extend_from_slice(&argument.to_be_bytes());
    }
}
