pub(crate) mod buffer;
pub(crate) mod mapping;
pub(crate) mod scanline;
