use std::io::{Read, Write};

/// The wire form of a polyomino: bounding-box dimensions and a row-major
/// bitmap of cell occupancy, packed 8 cells to the byte.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RawPolyomino {
    width: u8,
    height: u8,
    data: Vec<u8>,
}

impl RawPolyomino {
    pub fn new(width: u8, height: u8, data: &[u8]) -> Option<Self> {
        let len = (width as usize) * (height as usize);
        let byte_len = (len + 7) / 8;

        if data.len() != byte_len {
            return None;
        }

        Some(Self {
            width,
            height,
            data: data.to_vec(),
        })
    }

    pub fn new_empty(width: u8, height: u8) -> Self {
        let len = (width as usize) * (height as usize);
        let data = vec![0u8; (len + 7) / 8];

        Self {
            width,
            height,
            data,
        }
    }

    pub fn dims(&self) -> (u8, u8) {
        (self.width, self.height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The amount of cells present in this polyomino.
    pub fn present_cells(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn index(&self, x: u8, y: u8) -> (usize, u8) {
        let bit = (y as usize) * (self.width as usize) + (x as usize);

        let offset = bit % 8;
        let mask = 1 << offset;

        (bit / 8, mask)
    }

    pub fn get(&self, x: u8, y: u8) -> bool {
        let (index, mask) = self.index(x, y);
        (self.data[index] & mask) == mask
    }

    pub fn set(&mut self, x: u8, y: u8, value: bool) {
        let (index, mask) = self.index(x, y);
        if value {
            self.data[index] |= mask;
        } else {
            self.data[index] &= !mask;
        }
    }

    pub fn unpack(mut from: impl Read) -> std::io::Result<Self> {
        let mut dims = [0u8; 2];
        from.read_exact(&mut dims)?;

        let [width, height] = dims;
        let len = (width as usize) * (height as usize);

        let mut data = vec![0u8; (len + 7) / 8];
        from.read_exact(&mut data)?;

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn pack(&self, mut write: impl Write) -> std::io::Result<()> {
        write.write_all(&[self.width, self.height])?;

        write.write_all(&self.data)?;

        Ok(())
    }
}

impl core::fmt::Display for RawPolyomino {
    // Format the polyomino in a somewhat more easy to digest
    // format.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut grid = String::new();

        for _ in 0..self.width {
            grid.push('-');
        }
        grid.push('\n');

        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) {
                    grid.push('1');
                } else {
                    grid.push('0');
                }
            }
            grid.push('\n');
        }

        for _ in 0..self.width {
            grid.push('-');
        }

        write!(f, "{}", grid)
    }
}

#[test]
pub fn from_bytes() {
    // A P-pentomino in a 2x3 box:
    //   11
    //   11
    //   10
    let expected = RawPolyomino {
        width: 2,
        height: 3,
        data: vec![0x1F],
    };

    assert!(expected.get(0, 0));
    assert!(expected.get(1, 0));
    assert!(expected.get(0, 1));
    assert!(expected.get(1, 1));
    assert!(expected.get(0, 2));
    assert!(!expected.get(1, 2));

    let bytes: Vec<u8> = vec![0x02, 0x03, 0x1F];

    let from_bytes = RawPolyomino::unpack(&*bytes).unwrap();

    assert_eq!(expected, from_bytes);

    let mut to_bytes = Vec::new();
    from_bytes.pack(&mut to_bytes).unwrap();

    assert_eq!(bytes, to_bytes);
}

#[test]
pub fn present_cells() {
    let mut raw = RawPolyomino::new_empty(3, 3);
    raw.set(0, 0, true);
    raw.set(1, 0, true);
    raw.set(1, 1, true);

    assert_eq!(raw.present_cells(), 3);

    raw.set(1, 1, false);
    assert_eq!(raw.present_cells(), 2);
}
