// SPDX-License-Identifier: CC0-1.0

//! `Write` implementations for the hash and HMAC engines.
//!
//! With `std` enabled the engines implement `std::io::Write`, which `bitcoin-io` 0.1 bridges to
//! its own `Write`. Without `std` the `io` feature implements `bitcoin_io::Write` directly.

use crate::{md5, ripemd160, sha1, sha256, sha512, HashEngine, HmacEngine};

/// Implements the writer traits by feeding everything written into the engine.
macro_rules! impl_write {
    ([$($gen:tt)*] $ty:ty $(where $($bound:tt)*)?) => {
        #[cfg(feature = "std")]
        impl<$($gen)*> std::io::Write for $ty $(where $($bound)*)? {
            #[inline]
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.input(buf);
                Ok(buf.len())
            }

            #[inline]
            fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
        }

        #[cfg(all(feature = "bitcoin-io", not(feature = "std")))]
        impl<$($gen)*> bitcoin_io::Write for $ty $(where $($bound)*)? {
            #[inline]
            fn write(&mut self, buf: &[u8]) -> bitcoin_io::Result<usize> {
                self.input(buf);
                Ok(buf.len())
            }

            #[inline]
            fn flush(&mut self) -> bitcoin_io::Result<()> { Ok(()) }
        }
    };
}

impl_write!([] md5::HashEngine);
impl_write!([] sha1::HashEngine);
impl_write!([] ripemd160::HashEngine);
impl_write!([const N: usize] sha256::Engine<N> where sha256::Engine<N>: HashEngine<N>);
impl_write!([const N: usize] sha512::Engine<N> where sha512::Engine<N>: HashEngine<N>);
impl_write!([E: HashEngine<N>, const N: usize] HmacEngine<E, N>);

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::io::{self, Write};

    use crate::{md5, ripemd160, sha1, sha224, sha256, sha384, sha512, HashEngine, HmacEngine};

    macro_rules! write_test {
        ($mod:ident, $n:expr) => {
            #[test]
            fn $mod() {
                let data = [0x5a; 300];

                let mut engine = $mod::HashEngine::new();
                let mut reader: &[u8] = &data;
                let copied = io::copy(&mut reader, &mut engine).unwrap();
                assert_eq!(copied, 300);
                engine.flush().unwrap();
                assert_eq!(<$mod::HashEngine as HashEngine<$n>>::finalize(&mut engine), $mod::HashEngine::hash(&data));

                let mut engine = $mod::HashEngine::new();
                assert_eq!(engine.write(&data[..7]).unwrap(), 7);
                engine.write_all(&data[7..]).unwrap();
                assert_eq!($mod::Hash::from_engine(engine), $mod::Hash::hash(&data));
            }
        };
    }

    write_test!(md5, 16);
    write_test!(sha1, 20);
    write_test!(sha224, 28);
    write_test!(sha256, 32);
    write_test!(sha384, 48);
    write_test!(sha512, 64);
    write_test!(ripemd160, 20);

    #[test]
    fn hmac() {
        let data = [0x5a; 300];

        let mut engine = HmacEngine::<sha256::HashEngine, 32>::new(b"key");
        let mut reader: &[u8] = &data;
        io::copy(&mut reader, &mut engine).unwrap();
        let streamed = engine.finalize();

        assert_eq!(streamed, engine.compute(&data));
    }
}
