//! Order-preserving key encodings
//!
//! A radix key is sorted through its encoding: an unsigned word whose
//! ascending order matches the key's own ascending order. Keys up to 32 bits
//! encode into one `u32`; 64-bit keys encode into a `u64` that is sorted as a
//! low and a high `u32` chunk.
//!
//! | Key | Encoding |
//! |-----|----------|
//! | unsigned | the value, zero-extended |
//! | signed | the two's-complement bits with the sign bit flipped |
//! | float | positive: the bits with the sign bit set; negative: all bits inverted |

use bytemuck::Pod;

mod sealed {
    pub trait Sealed {}
}

/// Which radix path a key type takes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyWidth {
    /// 8- and 16-bit keys, zero-extended into one 32-bit word
    Narrow,
    /// 32-bit keys, one word
    Word,
    /// 64-bit keys, a low and a high word
    Wide,
}

/// Unsigned encoding word
pub trait RadixWord: sealed::Sealed + Pod + Ord + Send + Sync {
    /// Bits in the word
    const BITS: u32;

    /// Bits 0..32
    fn low_word(self) -> u32;

    /// Bits 32..64, zero for 32-bit words
    fn high_word(self) -> u32;

    /// The word whose low chunk is `low` and whose high chunk is zero
    fn from_low_word(low: u32) -> Self;
}

impl RadixWord for u32 {
    const BITS: u32 = 32;

    #[inline]
    fn low_word(self) -> u32 {
        self
    }

    #[inline]
    fn high_word(self) -> u32 {
        0
    }

    #[inline]
    fn from_low_word(low: u32) -> Self {
        low
    }
}

impl RadixWord for u64 {
    const BITS: u32 = 64;

    #[inline]
    fn low_word(self) -> u32 {
        self as u32
    }

    #[inline]
    fn high_word(self) -> u32 {
        (self >> 32) as u32
    }

    #[inline]
    fn from_low_word(low: u32) -> Self {
        u64::from(low)
    }
}

/// Key types with an order-preserving unsigned encoding
///
/// `decode(encode(x)) == x` for every bit pattern, and `x < y` implies
/// `encode(x) < encode(y)`.
pub trait RadixKey: sealed::Sealed + Pod + PartialOrd + Send + Sync {
    /// Encoded word type
    type Encoded: RadixWord;

    /// Radix path for this key
    const WIDTH: KeyWidth;

    /// Order-preserving encoding
    fn encode(self) -> Self::Encoded;

    /// Inverse of [`encode`](Self::encode)
    fn decode(encoded: Self::Encoded) -> Self;
}

macro_rules! impl_unsigned_key {
    ($($t:ty => $word:ty, $width:expr);* $(;)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl RadixKey for $t {
                type Encoded = $word;
                const WIDTH: KeyWidth = $width;

                #[inline]
                fn encode(self) -> $word {
                    self as $word
                }

                #[inline]
                fn decode(encoded: $word) -> Self {
                    encoded as $t
                }
            }
        )*
    };
}

macro_rules! impl_signed_key {
    ($($t:ty => $bits:ty, $word:ty, $width:expr);* $(;)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl RadixKey for $t {
                type Encoded = $word;
                const WIDTH: KeyWidth = $width;

                #[inline]
                fn encode(self) -> $word {
                    ((self as $bits) ^ (1 << (<$bits>::BITS - 1))) as $word
                }

                #[inline]
                fn decode(encoded: $word) -> Self {
                    ((encoded as $bits) ^ (1 << (<$bits>::BITS - 1))) as $t
                }
            }
        )*
    };
}

macro_rules! impl_float_key {
    ($($t:ty => $word:ty, $width:expr);* $(;)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl RadixKey for $t {
                type Encoded = $word;
                const WIDTH: KeyWidth = $width;

                #[inline]
                fn encode(self) -> $word {
                    const SIGN: $word = 1 << (<$word>::BITS - 1);
                    let bits = self.to_bits();
                    if bits & SIGN != 0 { !bits } else { bits | SIGN }
                }

                #[inline]
                fn decode(encoded: $word) -> Self {
                    const SIGN: $word = 1 << (<$word>::BITS - 1);
                    let bits = if encoded & SIGN != 0 { encoded ^ SIGN } else { !encoded };
                    <$t>::from_bits(bits)
                }
            }
        )*
    };
}

impl_unsigned_key! {
    u8 => u32, KeyWidth::Narrow;
    u16 => u32, KeyWidth::Narrow;
    u32 => u32, KeyWidth::Word;
    u64 => u64, KeyWidth::Wide;
}

impl_signed_key! {
    i8 => u8, u32, KeyWidth::Narrow;
    i16 => u16, u32, KeyWidth::Narrow;
    i32 => u32, u32, KeyWidth::Word;
    i64 => u64, u64, KeyWidth::Wide;
}

impl_float_key! {
    f32 => u32, KeyWidth::Word;
    f64 => u64, KeyWidth::Wide;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_strictly_increasing<K: RadixKey + std::fmt::Debug>(sorted: &[K]) {
        for w in sorted.windows(2) {
            assert!(w[0].encode() < w[1].encode(), "{:?} vs {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn test_narrow_keys_exhaustive() {
        for x in i8::MIN..=i8::MAX {
            assert_eq!(i8::decode(x.encode()), x);
        }
        for x in u16::MIN..=u16::MAX {
            assert_eq!(u16::decode(x.encode()), x);
        }
        let all_i16: Vec<i16> = (i16::MIN..=i16::MAX).collect();
        assert_strictly_increasing(&all_i16);
        for &x in &all_i16 {
            assert_eq!(i16::decode(x.encode()), x);
        }
    }

    #[test]
    fn test_signed_extremes() {
        assert_eq!(i32::MIN.encode(), 0);
        assert_eq!((-1i32).encode(), 0x7fff_ffff);
        assert_eq!(0i32.encode(), 0x8000_0000);
        assert_eq!(i32::MAX.encode(), u32::MAX);
        assert_strictly_increasing(&[i64::MIN, -5, 0, 5, i64::MAX]);
    }

    #[test]
    fn test_float_order() {
        assert_strictly_increasing(&[
            f32::NEG_INFINITY,
            -1.5e30,
            -1.0,
            -f32::MIN_POSITIVE,
            0.0,
            f32::MIN_POSITIVE,
            1.0,
            3.0e38,
            f32::INFINITY,
        ]);
        assert_strictly_increasing(&[f64::NEG_INFINITY, -2.0, -0.5, 0.0, 0.25, 1e300, f64::INFINITY]);
        // negative zero sorts just below positive zero
        assert!((-0.0f64).encode() < 0.0f64.encode());
    }

    #[test]
    fn test_float_bits_round_trip() {
        for bits in [0u32, 1, 0x7f80_0000, 0x7fc0_0001, 0x8000_0000, 0xff80_0000, u32::MAX] {
            assert_eq!(f32::decode(f32::from_bits(bits).encode()).to_bits(), bits);
        }
        for bits in [0u64, 0x8000_0000_0000_0000, 0x7ff8_0000_0000_0000, u64::MAX] {
            assert_eq!(f64::decode(f64::from_bits(bits).encode()).to_bits(), bits);
        }
    }

    #[test]
    fn test_widths_and_words() {
        assert_eq!(<u8 as RadixKey>::WIDTH, KeyWidth::Narrow);
        assert_eq!(<f32 as RadixKey>::WIDTH, KeyWidth::Word);
        assert_eq!(<i64 as RadixKey>::WIDTH, KeyWidth::Wide);
        let w = 0x0123_4567_89ab_cdefu64;
        assert_eq!(w.low_word(), 0x89ab_cdef);
        assert_eq!(w.high_word(), 0x0123_4567);
        assert_eq!(7u32.high_word(), 0);
    }
}
