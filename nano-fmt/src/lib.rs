#![cfg_attr(not(test), no_std)]

/// Writer trait for resource constrained systems.
pub trait NanoWrite {
    /// Write a byte to the writer.
    fn write_byte(&mut self, b: u8);

    /// Write every byte of `s` to the writer.
    fn write_str(&mut self, s: &str) {
        for b in s.bytes() {
            self.write_byte(b);
        }
    }
}

/// Display trait for resource constrained systems.
pub trait NanoDisplay {
    /// Write formatted representation of `self` to `f`.
    fn fmt<F: NanoWrite>(self, f: &mut F);
}

impl NanoDisplay for &str {
    fn fmt<F: NanoWrite>(self, f: &mut F) {
        f.write_str(self);
    }
}

impl NanoDisplay for bool {
    fn fmt<F: NanoWrite>(self, f: &mut F) {
        f.write_str(if self { "on" } else { "off" });
    }
}

/// Implement NanoDisplay for an unsigned type.
macro_rules! display_unsigned {
    ($ty:ident) => {
        impl $crate::NanoDisplay for $ty {
            fn fmt<F: $crate::NanoWrite>(mut self, f: &mut F) {
                const MAX_POW10: $ty = <$ty>::pow(10, $ty::MAX.ilog10() as u32);

                let mut div = MAX_POW10;
                let mut print = false;

                while div > 0 {
                    let dig = (self / div) as u8;
                    self %= div;
                    div /= 10;

                    if !print && dig > 0 {
                        print = true;
                    }

                    if print || (div == 0) {
                        f.write_byte(b'0' + dig);
                    }
                }
            }
        }
    };
}

display_unsigned!(u8);
display_unsigned!(u16);
display_unsigned!(u32);
display_unsigned!(u64);
display_unsigned!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    impl NanoWrite for Vec<u8> {
        fn write_byte(&mut self, b: u8) {
            self.push(b);
        }
    }

    fn render<T: NanoDisplay>(value: T) -> String {
        let mut out = Vec::new();
        value.fmt(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn zero_prints_single_digit() {
        assert_eq!(render(0u16), "0");
    }

    #[test]
    fn leading_zeroes_are_skipped() {
        assert_eq!(render(1024u16), "1024");
        assert_eq!(render(65535u16), "65535");
        assert_eq!(render(100u8), "100");
    }

    #[test]
    fn wide_values() {
        assert_eq!(render(67_108_864u32), "67108864");
        assert_eq!(render(u32::MAX), "4294967295");
    }

    #[test]
    fn strings_and_flags() {
        assert_eq!(render("tc1"), "tc1");
        assert_eq!(render(true), "on");
        assert_eq!(render(false), "off");
    }
}
