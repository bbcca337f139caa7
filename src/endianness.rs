//! Integer decoding under the byte order resolved from the magic number
//!
//! A capture file starting with `a1 b2 c3 d4` stores every integer most-significant byte
//! first. If the magic is read as `d4 c3 b2 a1`, the file was written with the other byte order
//! and all fields are *flipped*. The `flipped` flag is resolved once per file and passed
//! explicitly to every decoding function.

use nom::bytes::complete::take;
use nom::combinator::map;
use nom::IResult;

use crate::error::PcapError;

/// Decode a 16-bit unsigned integer
#[inline]
pub fn get_u16(i: [u8; 2], flipped: bool) -> u16 {
    if flipped {
        u16::from_le_bytes(i)
    } else {
        u16::from_be_bytes(i)
    }
}

/// Decode a 32-bit unsigned integer
#[inline]
pub fn get_u32(i: [u8; 4], flipped: bool) -> u32 {
    if flipped {
        u32::from_le_bytes(i)
    } else {
        u32::from_be_bytes(i)
    }
}

/// Decode a 32-bit signed integer
#[inline]
pub fn get_i32(i: [u8; 4], flipped: bool) -> i32 {
    if flipped {
        i32::from_le_bytes(i)
    } else {
        i32::from_be_bytes(i)
    }
}

/// Take exactly `N` bytes from the input
pub(crate) fn take_array<const N: usize>(i: &[u8]) -> IResult<&[u8], [u8; N], PcapError> {
    let (rem, b) = take(N)(i)?;
    let mut a = [0u8; N];
    a.copy_from_slice(b);
    Ok((rem, a))
}

pub(crate) fn parse_u16<'a>(
    flipped: bool,
) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], u16, PcapError> {
    map(take_array::<2>, move |b| get_u16(b, flipped))
}

pub(crate) fn parse_u32<'a>(
    flipped: bool,
) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], u32, PcapError> {
    map(take_array::<4>, move |b| get_u32(b, flipped))
}

pub(crate) fn parse_i32<'a>(
    flipped: bool,
) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], i32, PcapError> {
    map(take_array::<4>, move |b| get_i32(b, flipped))
}
