//! Binary lexicon archive
//!
//! An archive is a headerless sequence of little-endian records:
//!
//! ```text
//! i32 spelling length | spelling (UTF-8) | i32 variant count | count x 8 bytes
//! ```
//!
//! Each 8-byte variant holds tag, language, flags, subcategory, person,
//! gender, number and tense, one byte each. The stream ends at a record
//! boundary; there is no terminator.

use crate::domain::lexicon::Lexicon;
use crate::domain::morphology::WordVariant;
use crate::error::{Error, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

const READ_BUFFER_SIZE: usize = 1 << 20;

/// Write every word of `lexicon` in depth-first order
///
/// Returns the number of records written.
pub fn write_lexicon<W: Write>(lexicon: &Lexicon, mut writer: W) -> Result<usize> {
    let mut records = 0;
    for word in lexicon.walk() {
        let spelling = lexicon.spelling(word);
        write_len(&mut writer, spelling.len(), "spelling length")?;
        writer.write_all(spelling.as_bytes())?;
        write_len(&mut writer, word.variants().len(), "variant count")?;
        for variant in word.variants() {
            writer.write_all(&variant.to_bytes())?;
        }
        records += 1;
    }
    writer.flush()?;
    Ok(records)
}

fn write_len<W: Write>(writer: &mut W, len: usize, field: &str) -> Result<()> {
    let len = i32::try_from(len).map_err(|_| Error::InvalidRecord {
        offset: 0,
        reason: format!("{field} {len} does not fit in a signed 32-bit integer"),
    })?;
    writer.write_all(&len.to_le_bytes())?;
    Ok(())
}

/// Read records until end of stream and insert each into `lexicon`
///
/// Returns the number of records read. On error the lexicon keeps the
/// records inserted so far and should be discarded.
pub fn read_lexicon<R: Read>(reader: R, lexicon: &mut Lexicon) -> Result<usize> {
    let mut reader = RecordReader::new(reader);
    let mut records = 0;
    loop {
        let record_start = reader.offset;
        let mut len = [0u8; 4];
        match reader.fill(&mut len)? {
            0 => break,
            4 => {}
            _ => {
                return Err(Error::Truncated {
                    offset: record_start,
                    context: "spelling length",
                })
            }
        }
        let len = reader.length(len, "spelling length")?;
        if len == 0 {
            return Err(Error::InvalidRecord {
                offset: record_start,
                reason: "empty spelling".to_string(),
            });
        }

        let spelling_offset = reader.offset;
        let spelling = reader.bytes(len, "spelling")?;
        let spelling = String::from_utf8(spelling).map_err(|source| Error::InvalidSpelling {
            offset: spelling_offset,
            source,
        })?;

        let mut count = [0u8; 4];
        reader.exact(&mut count, "variant count")?;
        let count = reader.length(count, "variant count")?;

        let mut variants = Vec::with_capacity(count.min(64));
        for _ in 0..count {
            let mut bytes = [0u8; WordVariant::ENCODED_LEN];
            reader.exact(&mut bytes, "variant record")?;
            variants.push(WordVariant::from_bytes(bytes)?);
        }

        lexicon.insert(&spelling, variants)?;
        records += 1;
    }
    Ok(records)
}

/// Byte-counting reader that tells a clean end of stream from truncation
struct RecordReader<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> RecordReader<R> {
    fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Read as much of `buf` as the stream holds; returns the byte count
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        self.offset += filled as u64;
        Ok(filled)
    }

    fn exact(&mut self, buf: &mut [u8], context: &'static str) -> Result<()> {
        let start = self.offset;
        if self.fill(buf)? < buf.len() {
            return Err(Error::Truncated {
                offset: start,
                context,
            });
        }
        Ok(())
    }

    /// Read exactly `len` bytes without trusting `len` for the allocation
    fn bytes(&mut self, len: usize, context: &'static str) -> Result<Vec<u8>> {
        let start = self.offset;
        let mut buf = Vec::with_capacity(len.min(READ_BUFFER_SIZE));
        let read = (&mut self.inner).take(len as u64).read_to_end(&mut buf)?;
        self.offset += read as u64;
        if read < len {
            return Err(Error::Truncated {
                offset: start,
                context,
            });
        }
        Ok(buf)
    }

    /// Decode a length field that was just read
    fn length(&self, bytes: [u8; 4], context: &str) -> Result<usize> {
        let value = i32::from_le_bytes(bytes);
        usize::try_from(value).map_err(|_| Error::InvalidRecord {
            offset: self.offset - 4,
            reason: format!("negative {context} {value}"),
        })
    }
}

impl Lexicon {
    /// Load an archive file into this lexicon
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let records = read_lexicon(BufReader::with_capacity(READ_BUFFER_SIZE, file), self)?;
        debug!(
            "loaded {records} records from {} ({} words, {} nodes)",
            path.display(),
            self.word_count(),
            self.node_count()
        );
        Ok(records)
    }

    /// Build a lexicon from an archive file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut lexicon = Self::new();
        lexicon.load(path)?;
        Ok(lexicon)
    }

    /// Write this lexicon to an archive file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let records = write_lexicon(self, BufWriter::new(file))?;
        debug!("saved {records} records to {}", path.display());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::morphology::{Language, Number, Tag};
    use std::io::Cursor;

    fn encode(lexicon: &Lexicon) -> Vec<u8> {
        let mut buf = Vec::new();
        write_lexicon(lexicon, &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_record_layout() {
        let mut lexicon = Lexicon::new();
        let variant = WordVariant::new(Tag::Noun, Language::French).with_number(Number::PLURAL);
        lexicon.insert("été", [variant]).unwrap();

        let bytes = encode(&lexicon);
        let mut expected = 5i32.to_le_bytes().to_vec();
        expected.extend_from_slice("été".as_bytes());
        expected.extend_from_slice(&1i32.to_le_bytes());
        expected.extend_from_slice(&[1, 2, 0, 0, 0, 0, 2, 0]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_empty_stream_is_empty_lexicon() {
        let mut lexicon = Lexicon::new();
        assert_eq!(read_lexicon(Cursor::new(Vec::new()), &mut lexicon).unwrap(), 0);
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_truncated_inside_record() {
        let mut lexicon = Lexicon::new();
        lexicon
            .insert("chat", [WordVariant::new(Tag::Noun, Language::French)])
            .unwrap();
        let bytes = encode(&lexicon);

        for cut in [2, 6, 10, bytes.len() - 1] {
            let mut target = Lexicon::new();
            let err = read_lexicon(Cursor::new(&bytes[..cut]), &mut target).unwrap_err();
            assert!(matches!(err, Error::Truncated { .. }), "cut {cut}: {err}");
        }
    }

    #[test]
    fn test_negative_length() {
        let mut lexicon = Lexicon::new();
        let err = read_lexicon(Cursor::new((-3i32).to_le_bytes()), &mut lexicon).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { offset: 0, .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut bytes = 2i32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0xc3, 0x28]);
        bytes.extend_from_slice(&0i32.to_le_bytes());
        let err = read_lexicon(Cursor::new(bytes), &mut Lexicon::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidSpelling { offset: 4, .. }));
    }

    #[test]
    fn test_unknown_tag_byte() {
        let mut bytes = 1i32.to_le_bytes().to_vec();
        bytes.push(b'a');
        bytes.extend_from_slice(&1i32.to_le_bytes());
        bytes.extend_from_slice(&[200, 0, 0, 0, 0, 0, 0, 0]);
        let err = read_lexicon(Cursor::new(bytes), &mut Lexicon::new()).unwrap_err();
        assert!(matches!(err, Error::UnknownVocabulary { .. }));
    }

    #[test]
    fn test_word_without_variants_round_trips() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("...", Vec::new()).unwrap();
        let mut decoded = Lexicon::new();
        read_lexicon(Cursor::new(encode(&lexicon)), &mut decoded).unwrap();
        assert!(decoded.get("...").unwrap().variants().is_empty());
    }
}
