//! Byte swapping and host/network normalization.
//!
//! The wire carries integers little-endian. On little-endian hosts
//! [`host_to_network`] and [`network_to_host`] compile to nothing; on
//! big-endian hosts they reverse the bytes.

use wirebits_core::config::needs_byte_swap;

/// Integers that can be byte-swapped and normalized to wire order.
pub trait ByteSwap: Copy {
    /// Reverses the order of bytes in the value.
    fn bswap(self) -> Self;

    /// Converts the value from host byte order to wire byte order.
    #[inline]
    fn host_to_network(self) -> Self {
        if needs_byte_swap() {
            self.bswap()
        } else {
            self
        }
    }

    /// Converts the value from wire byte order to host byte order.
    #[inline]
    fn network_to_host(self) -> Self {
        if needs_byte_swap() {
            self.bswap()
        } else {
            self
        }
    }
}

macro_rules! impl_byte_swap {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ByteSwap for $ty {
                #[inline]
                fn bswap(self) -> Self {
                    self.swap_bytes()
                }
            }
        )*
    };
}

impl_byte_swap!(u16, u32, u64, i16, i32, i64);

/// Reverses the order of bytes in `value`.
#[inline]
pub fn bswap<T: ByteSwap>(value: T) -> T {
    value.bswap()
}

/// Converts `value` from host byte order to wire byte order.
#[inline]
pub fn host_to_network<T: ByteSwap>(value: T) -> T {
    value.host_to_network()
}

/// Converts `value` from wire byte order to host byte order.
#[inline]
pub fn network_to_host<T: ByteSwap>(value: T) -> T {
    value.network_to_host()
}
