/// Byte order applied to every multi-byte access of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl Endian {
    /// Byte order of the host platform, fixed at compile time.
    pub const NATIVE: Endian = if cfg!(target_endian = "big") {
        Endian::Big
    } else {
        Endian::Little
    };

    /// Encodes `value` into its in-memory representation under this order.
    pub fn encode_u16(self, value: u16) -> [u8; 2] {
        match self {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        }
    }

    /// Decodes a value stored under this order.
    pub fn decode_u16(self, raw: [u8; 2]) -> u16 {
        match self {
            Endian::Little => u16::from_le_bytes(raw),
            Endian::Big => u16::from_be_bytes(raw),
        }
    }

    /// Encodes `value` into its in-memory representation under this order.
    pub fn encode_u32(self, value: u32) -> [u8; 4] {
        match self {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        }
    }

    /// Decodes a value stored under this order.
    pub fn decode_u32(self, raw: [u8; 4]) -> u32 {
        match self {
            Endian::Little => u32::from_le_bytes(raw),
            Endian::Big => u32::from_be_bytes(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_matches_target() {
        if cfg!(target_endian = "big") {
            assert_eq!(Endian::NATIVE, Endian::Big);
        } else {
            assert_eq!(Endian::NATIVE, Endian::Little);
        }
    }

    #[test]
    fn test_u16_layout() {
        assert_eq!(Endian::Big.encode_u16(0x1112), [0x11, 0x12]);
        assert_eq!(Endian::Little.encode_u16(0x1112), [0x12, 0x11]);
    }

    #[test]
    fn test_u32_layout() {
        assert_eq!(Endian::Big.encode_u32(0x12345678), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(
            Endian::Little.encode_u32(0x12345678),
            [0x78, 0x56, 0x34, 0x12]
        );
    }

    #[test]
    fn test_decode_inverts_encode() {
        for order in [Endian::Little, Endian::Big] {
            assert_eq!(order.decode_u16(order.encode_u16(0xBEEF)), 0xBEEF);
            assert_eq!(order.decode_u32(order.encode_u32(0xDEADBEEF)), 0xDEADBEEF);
        }
    }
}
