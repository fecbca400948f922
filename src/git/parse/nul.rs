use std::io::{BufRead, Read};

use crate::error::Error;

/// Splits a stream into NUL terminated records.
///
/// Every record, including the last one, must be followed by a NUL byte.
/// At most one record is buffered at a time.
pub(crate) struct NulRecords<R> {
    reader: R,
    max_len: usize,
    lossy: bool,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> NulRecords<R> {
    /// With `lossy` set, invalid UTF-8 is replaced by U+FFFD. Otherwise it
    /// fails the record.
    pub fn new(reader: R, max_len: usize, lossy: bool) -> Self {
        Self {
            reader,
            max_len,
            lossy,
            buf: vec![],
            done: false,
        }
    }

    fn read_record(&mut self) -> Result<Option<String>, Error> {
        self.buf.clear();

        // Room for the record and its terminator
        let limit = (self.max_len as u64).saturating_add(1);
        let read = (&mut self.reader)
            .take(limit)
            .read_until(0, &mut self.buf)
            .map_err(Error::ReadStatus)?;

        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() != Some(&0) {
            let at_end = self
                .reader
                .fill_buf()
                .map_err(Error::ReadStatus)?
                .is_empty();

            return if read as u64 == limit && !at_end {
                Err(Error::RecordTooLong(self.max_len))
            } else {
                Err(Error::MissingTerminator)
            };
        }

        self.buf.pop();
        self.decode().map(Some)
    }

    fn decode(&self) -> Result<String, Error> {
        if let Ok(text) = std::str::from_utf8(&self.buf) {
            return Ok(text.to_string());
        }

        let text = String::from_utf8_lossy(&self.buf).into_owned();
        if !self.lossy {
            return Err(Error::InvalidUtf8(text));
        }

        log::warn!("Record is not valid UTF-8, decoded as {:?}", text);
        Ok(text)
    }
}

impl<R: BufRead> Iterator for NulRecords<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let record = self.read_record().transpose();
        if !matches!(record, Some(Ok(_))) {
            self.done = true;
        }
        record
    }
}
