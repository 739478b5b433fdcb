use arrayvec::{ArrayString, ArrayVec};

use crate::c_str::{c_str_chars, CStrShim};
use crate::constants::Char;
use crate::error::Error;
use crate::filter_type::FilterType;

/// Trait that allows writing integers into sinks through their conversion shims.
///
/// The sink side only ever sees the shim through [`CStrShim`]; it never learns
/// which integer type produced the text. Returns the number of units written.
///
/// # Example
///
/// ```
/// use arrayvec::ArrayString;
/// use num_shim::WriteFiltered;
///
/// let mut s = ArrayString::<32>::new();
/// s.write_filtered(-7i8).unwrap();
/// s.push(',');
/// s.write_filtered(u64::MAX).unwrap();
/// assert_eq!(s.as_str(), "-7,18446744073709551615");
/// ```
pub trait WriteFiltered {
    /// Converts `value` into its shim and writes the shim's text into `self`.
    fn write_filtered<T: FilterType>(&mut self, value: T) -> Result<usize, Error>;
}

#[cfg(not(feature = "wide-chars"))]
fn text_of<S: CStrShim + ?Sized>(shim: &S) -> Result<&str, Error> {
    let bytes = c_str_chars(shim);
    core::str::from_utf8(bytes).map_err(|e| Error::InvalidText {
        unit: u32::from(bytes[e.valid_up_to()]),
    })
}

/// Narrows one unit to a byte, accepting ASCII only.
#[inline]
#[allow(clippy::unnecessary_cast)]
fn narrow(unit: Char) -> Result<u8, Error> {
    if unit < 0x80 {
        Ok(unit as u8)
    } else {
        Err(Error::InvalidText {
            unit: u32::from(unit),
        })
    }
}

/// Feeds the shim's text to `sink` as runs of bytes.
#[cfg_attr(not(feature = "wide-chars"), allow(dead_code))]
fn for_each_byte_run<S, F>(shim: &S, mut sink: F) -> Result<usize, Error>
where
    S: CStrShim + ?Sized,
    F: FnMut(&[u8]) -> Result<(), Error>,
{
    let chars = c_str_chars(shim);
    let mut scratch = ArrayVec::<u8, 32>::new();
    for chunk in chars.chunks(scratch.capacity()) {
        scratch.clear();
        for &unit in chunk {
            scratch.push(narrow(unit)?);
        }
        sink(&scratch)?;
    }
    Ok(chars.len())
}

fn write_fmt_sink<W, S>(w: &mut W, shim: &S, sink_kind: &'static str) -> Result<usize, Error>
where
    W: core::fmt::Write + ?Sized,
    S: CStrShim + ?Sized,
{
    #[cfg(feature = "wide-chars")]
    let result = for_each_byte_run(shim, |run| {
        for &b in run {
            w.write_char(char::from(b))?;
        }
        Ok(())
    });
    #[cfg(not(feature = "wide-chars"))]
    let result = text_of(shim).and_then(|s| {
        w.write_str(s)?;
        Ok(s.len())
    });
    trace_write(sink_kind, result.as_ref().copied());
    result
}

#[cfg(feature = "std")]
fn write_io_sink<W, S>(w: &mut W, shim: &S, sink_kind: &'static str) -> Result<usize, Error>
where
    W: std::io::Write + ?Sized,
    S: CStrShim + ?Sized,
{
    #[cfg(feature = "wide-chars")]
    let result = for_each_byte_run(shim, |run| Ok(w.write_all(run)?));
    #[cfg(not(feature = "wide-chars"))]
    let result = text_of(shim).and_then(|s| {
        w.write_all(s.as_bytes())?;
        Ok(s.len())
    });
    trace_write(sink_kind, result.as_ref().copied());
    result
}

#[cfg(feature = "tracing")]
fn trace_write(sink_kind: &'static str, result: Result<usize, &Error>) {
    match result {
        Ok(len) => tracing::trace!(sink = sink_kind, len, "wrote filtered integer"),
        Err(e) => tracing::debug!(sink = sink_kind, error = %e, "sink rejected filtered integer"),
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_write(_sink_kind: &'static str, _result: Result<usize, &Error>) {}

/// Fails with [`Error::Capacity`] before anything is written to a fixed sink.
fn check_capacity(
    sink_kind: &'static str,
    required: usize,
    available: usize,
) -> Result<(), Error> {
    if required > available {
        let err = Error::Capacity {
            required,
            available,
        };
        trace_write(sink_kind, Err(&err));
        return Err(err);
    }
    Ok(())
}

impl<const CAP: usize> WriteFiltered for ArrayString<CAP> {
    fn write_filtered<T: FilterType>(&mut self, value: T) -> Result<usize, Error> {
        let shim = value.filter_type();
        check_capacity("ArrayString", shim.c_str_len(), self.remaining_capacity())?;
        write_fmt_sink(self, &shim, "ArrayString")
    }
}

impl<const CAP: usize> WriteFiltered for ArrayVec<u8, CAP> {
    fn write_filtered<T: FilterType>(&mut self, value: T) -> Result<usize, Error> {
        let shim = value.filter_type();
        check_capacity("ArrayVec", shim.c_str_len(), self.remaining_capacity())?;
        let start = self.len();
        for &unit in c_str_chars(&shim) {
            match narrow(unit) {
                Ok(b) => self.push(b),
                Err(e) => {
                    self.truncate(start);
                    return Err(e);
                }
            }
        }
        let written = self.len() - start;
        trace_write("ArrayVec", Ok(written));
        Ok(written)
    }
}

#[cfg(feature = "std")]
mod std_impls {
    use std::fs::File;
    use std::io::{BufWriter, Stderr, StderrLock, Stdout, StdoutLock, Write};

    use super::{write_fmt_sink, write_io_sink, WriteFiltered};
    use crate::error::Error;
    use crate::filter_type::FilterType;

    impl WriteFiltered for String {
        fn write_filtered<T: FilterType>(&mut self, value: T) -> Result<usize, Error> {
            write_fmt_sink(self, &value.filter_type(), "String")
        }
    }

    macro_rules! impl_for_io_write {
        ($($t:ty),* $(,)?) => {$(
            impl WriteFiltered for $t {
                fn write_filtered<T: FilterType>(&mut self, value: T) -> Result<usize, Error> {
                    write_io_sink(self, &value.filter_type(), stringify!($t))
                }
            }
        )*};
    }

    impl_for_io_write!(Vec<u8>, File, Stdout, Stderr);

    impl WriteFiltered for StdoutLock<'_> {
        fn write_filtered<T: FilterType>(&mut self, value: T) -> Result<usize, Error> {
            write_io_sink(self, &value.filter_type(), "StdoutLock")
        }
    }

    impl WriteFiltered for StderrLock<'_> {
        fn write_filtered<T: FilterType>(&mut self, value: T) -> Result<usize, Error> {
            write_io_sink(self, &value.filter_type(), "StderrLock")
        }
    }

    impl<W: Write> WriteFiltered for BufWriter<W> {
        fn write_filtered<T: FilterType>(&mut self, value: T) -> Result<usize, Error> {
            write_io_sink(self, &value.filter_type(), "BufWriter")
        }
    }
}
