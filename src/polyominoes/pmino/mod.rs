//! Interaction with `.pmino` catalog files.
//!
//! A `.pmino` file is a header followed by a (possibly gzip-compressed)
//! sequence of packed [`RawPolyomino`]s. The header is 4 magic bytes, one
//! byte flagging whether the shapes are canonical, one compression byte,
//! and a LEB128 shape count (0 means the count is unknown).

use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read, Write},
    path::Path,
};

use flate2::{read::GzDecoder, write::GzEncoder};

mod raw_polyomino;
pub use raw_polyomino::RawPolyomino;

const MAGIC: [u8; 4] = [0x50, 0x4D, 0x4E, 0x4F];

/// Compression types supported for `.pmino` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

impl From<Compression> for u8 {
    fn from(value: Compression) -> Self {
        match value {
            Compression::None => 0,
            Compression::Gzip => 1,
        }
    }
}

impl TryFrom<u8> for Compression {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Gzip),
            _ => Err(()),
        }
    }
}

#[derive(Debug)]
enum Reader<T>
where
    T: Read,
{
    Uncompressed(BufReader<T>),
    Gzip(GzDecoder<T>),
}

impl<T> Read for Reader<T>
where
    T: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Reader::Uncompressed(t) => t.read(buf),
            Reader::Gzip(t) => t.read(buf),
        }
    }
}

enum Writer<T>
where
    T: Write,
{
    Uncompressed(T),
    Gzip(GzEncoder<T>),
}

impl<T> Write for Writer<T>
where
    T: Write,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Writer::Uncompressed(t) => t.write(buf),
            Writer::Gzip(t) => t.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Writer::Uncompressed(t) => t.flush(),
            Writer::Gzip(t) => t.flush(),
        }
    }
}

/// A pmino file.
///
/// Use this file as an iterator to get all of the [`RawPolyomino`]s it
/// contains.
#[derive(Debug)]
pub struct PminoFile<T = File>
where
    T: Read,
{
    input: Reader<T>,
    len: Option<usize>,
    shapes_read: usize,
    shapes_are_canonical: bool,
}

impl<T> Iterator for PminoFile<T>
where
    T: Read,
{
    type Item = std::io::Result<RawPolyomino>;

    fn size_hint(&self) -> (usize, Option<usize>) {
        if let Some(len) = self.len {
            (len, Some(len))
        } else {
            (0, None)
        }
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<T> PminoFile<T>
where
    T: Read,
{
    /// The compression used by this pmino file.
    pub fn compression(&self) -> Compression {
        match self.input {
            Reader::Uncompressed(_) => Compression::None,
            Reader::Gzip(_) => Compression::Gzip,
        }
    }

    /// The amount of polyominoes in this file, if known.
    pub fn len(&self) -> Option<usize> {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == Some(0)
    }

    /// `true` if the file indicates that the shapes are in canonical form.
    pub fn canonical(&self) -> bool {
        self.shapes_are_canonical
    }

    /// Try to create a new [`PminoFile`] from the provided byte source.
    pub fn new(mut input: T) -> std::io::Result<Self> {
        let mut magic = [0u8; 4];
        input.read_exact(&mut magic)?;

        if magic != MAGIC {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                "File magic was incorrect.",
            ));
        }

        let mut header = [0u8; 2];
        input.read_exact(&mut header)?;

        let [orientation, compression] = header;
        let canonical = orientation != 0;

        let shape_count = read_leb128(&mut input)?;

        let len = if shape_count == 0 {
            None
        } else {
            Some(shape_count as usize)
        };

        let input = match Compression::try_from(compression) {
            Ok(Compression::None) => Reader::Uncompressed(BufReader::new(input)),
            Ok(Compression::Gzip) => Reader::Gzip(GzDecoder::new(input)),
            Err(_) => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Unsupported compression type {compression}"),
                ))
            }
        };

        Ok(Self {
            input,
            len,
            shapes_read: 0,
            shapes_are_canonical: canonical,
        })
    }

    pub fn next(&mut self) -> Option<std::io::Result<RawPolyomino>> {
        let next_shape = RawPolyomino::unpack(&mut self.input);

        match (next_shape, self.len) {
            (Ok(s), _) => {
                self.shapes_read += 1;
                Some(Ok(s))
            }
            (Err(_), None) => None,
            (Err(e), Some(expected)) => {
                if expected == self.shapes_read {
                    None
                } else {
                    let msg = format!(
                        "Expected {expected} shapes, but failed to read after {} shapes. Error: {e}",
                        self.shapes_read
                    );
                    Some(Err(std::io::Error::new(ErrorKind::InvalidData, msg)))
                }
            }
        }
    }
}

impl PminoFile {
    /// Try to create a new [`PminoFile`] from the given path.
    pub fn new_file(p: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = std::fs::File::open(p.as_ref())?;
        Self::new(file)
    }

    /// Write the [`RawPolyomino`]s produced by `shapes` into `write`.
    ///
    /// `is_canonical` should only be set to `true` if all shapes in
    /// `shapes` are in canonical form. The shape count is taken from the
    /// iterator's upper size hint, so exact-size iterators produce a
    /// header with an exact count.
    pub fn write<I, W>(
        is_canonical: bool,
        compression: Compression,
        shapes: I,
        mut write: W,
    ) -> std::io::Result<usize>
    where
        I: Iterator<Item = RawPolyomino>,
        W: Write,
    {
        let len = shapes.size_hint().1.map(|v| v as u64).unwrap_or(0);
        let orientation: u8 = if is_canonical { 1 } else { 0 };

        write.write_all(&MAGIC)?;
        write.write_all(&[orientation, compression.into()])?;
        write_leb128(len, &mut write)?;

        let mut writer = match compression {
            Compression::None => Writer::Uncompressed(write),
            Compression::Gzip => {
                Writer::Gzip(GzEncoder::new(write, flate2::Compression::default()))
            }
        };

        let mut shape_count = 0;
        for shape in shapes {
            shape.pack(&mut writer)?;
            shape_count += 1;
        }

        match writer {
            Writer::Uncompressed(mut w) => w.flush()?,
            Writer::Gzip(encoder) => {
                encoder.finish()?;
            }
        }

        Ok(shape_count)
    }

    /// Write the [`RawPolyomino`]s produced by `shapes` to the file at `path`.
    ///
    /// This will create a new file, or _will_ overwrite the contents of
    /// the file at `path`. It will not create the parent directories of
    /// `path`.
    pub fn write_file<I>(
        is_canonical: bool,
        compression: Compression,
        shapes: I,
        path: impl AsRef<Path>,
    ) -> std::io::Result<usize>
    where
        I: Iterator<Item = RawPolyomino>,
    {
        let file = std::fs::File::create(path.as_ref())?;

        Self::write(is_canonical, compression, shapes, file)
    }
}

fn read_leb128(mut reader: impl Read) -> std::io::Result<u64> {
    let mut value: u64 = 0;
    let mut shift = 0;

    loop {
        let mut next_byte = [0u8; 1];
        reader.read_exact(&mut next_byte)?;

        let [next_byte] = next_byte;

        let is_last_byte = (next_byte & 0x80) == 0x00;
        let bits = (next_byte & 0x7F) as u64;

        if shift > 63 && bits != 0 || shift > 56 && bits > 1 {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                "Cannot load more than u64 shapes",
            ));
        }

        value |= bits.overflowing_shl(shift).0;
        shift += 7;

        if is_last_byte {
            break;
        }
    }

    Ok(value)
}

fn write_leb128(mut number: u64, mut writer: impl Write) -> std::io::Result<()> {
    loop {
        let mut next_byte = (number as u8) & 0x7F;
        number >>= 7;

        if number > 0 {
            next_byte |= 0x80;
        }

        writer.write_all(&[next_byte])?;

        if number == 0 {
            return Ok(());
        }
    }
}

#[test]
pub fn leb128_roundtrip() {
    let values = [0, 1, 24, 150283, 0x7FFFF_FFFF, u64::MAX - 1, u64::MAX];

    for value in values {
        let mut data = Vec::new();
        write_leb128(value, &mut data).unwrap();

        assert_eq!(value, read_leb128(&data[..]).unwrap());
    }
}

#[test]
pub fn leb128_unparseable() {
    let unparseable_values = [
        &[0x81, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x02][..],
        &[
            0x81, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01,
        ][..],
    ];

    for unparseable in unparseable_values {
        assert!(read_leb128(unparseable).is_err());
    }
}

#[test]
pub fn bad_magic() {
    let bytes = [0x00, 0x01, 0x02, 0x03, 0x00, 0x00, 0x00];

    let err = PminoFile::new(&bytes[..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::polyominoes::point_list::expand::generate;
    use crate::polyominoes::point_list::Polyomino;

    fn roundtrip(compression: Compression) {
        let tetrominoes = generate(4);

        let mut buffer = Vec::new();
        let written = PminoFile::write(
            true,
            compression,
            tetrominoes.iter().map(RawPolyomino::from),
            &mut buffer,
        )
        .unwrap();

        assert_eq!(written, tetrominoes.len());

        let file = PminoFile::new(&buffer[..]).unwrap();
        assert!(file.canonical());
        assert_eq!(file.compression(), compression);
        assert_eq!(file.len(), Some(tetrominoes.len()));

        let read_back: Vec<Polyomino> = file.map(|s| Polyomino::from(s.unwrap())).collect();

        assert_eq!(read_back, tetrominoes);
    }

    #[test]
    fn file_roundtrip_uncompressed() {
        roundtrip(Compression::None);
    }

    #[test]
    fn file_roundtrip_gzip() {
        roundtrip(Compression::Gzip);
    }
}
