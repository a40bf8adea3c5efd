use std::{
    collections::{BTreeMap, BTreeSet},
    error,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Result;
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidDigit(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDigit(c) => write!(f, "Invalid digit({}) in disk map.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

/// Dense disk map: lengths alternate between files and free space, files are
/// numbered from 0 in order of appearance.
#[derive(Debug)]
pub struct DiskMap {
    files: Vec<Span>,
    gaps: Vec<Span>,
}

impl FromStr for DiskMap {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut files = Vec::new();
        let mut gaps = Vec::new();
        let mut start = 0;
        for (ind, c) in s.trim().chars().enumerate() {
            let len = c.to_digit(10).ok_or(Error::InvalidDigit(c))? as usize;
            let span = Span { start, len };
            if ind % 2 == 0 {
                files.push(span);
            } else {
                gaps.push(span);
            }
            start += len;
        }

        Ok(Self { files, gaps })
    }
}

impl DiskMap {
    /// Moves single blocks from the end into the leftmost free block until no
    /// gap is left between files, then returns the checksum.
    pub fn compact_blocks_checksum(&self) -> usize {
        let mut blocks = self.blocks();
        let (mut left, mut right) = (0, blocks.len());
        loop {
            while left < right && blocks[left].is_some() {
                left += 1;
            }
            while right > left && blocks[right - 1].is_none() {
                right -= 1;
            }
            if right <= left + 1 {
                break;
            }

            blocks.swap(left, right - 1);
        }

        checksum(blocks.iter().enumerate().filter_map(|(pos, id)| id.map(|id| (pos, id))))
    }

    /// Tries each file once, highest id first, moving it whole into the
    /// leftmost span of free space that fits and lies to its left.
    pub fn compact_files_checksum(&self) -> usize {
        // Free spans indexed by length, each set ordered by start.
        let mut free: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
        for gap in self.gaps.iter().filter(|g| g.len > 0) {
            free.entry(gap.len).or_default().insert(gap.start);
        }

        let mut files = self.files.clone();
        for file in files.iter_mut().rev().filter(|f| f.len > 0) {
            let best = free
                .range(file.len..)
                .filter_map(|(len, starts)| starts.first().map(|start| (*start, *len)))
                .filter(|(start, _)| *start < file.start)
                .min();
            let Some((start, len)) = best else {
                continue;
            };

            if let Some(starts) = free.get_mut(&len) {
                starts.remove(&start);
                if starts.is_empty() {
                    free.remove(&len);
                }
            }
            if len > file.len {
                free.entry(len - file.len)
                    .or_default()
                    .insert(start + file.len);
            }
            file.start = start;
        }

        checksum(
            files
                .iter()
                .enumerate()
                .flat_map(|(id, f)| (f.start..f.start + f.len).map(move |pos| (pos, id))),
        )
    }

    fn blocks(&self) -> Vec<Option<usize>> {
        let mut blocks = Vec::new();
        for (id, file) in self.files.iter().enumerate() {
            blocks.extend(std::iter::repeat(Some(id)).take(file.len));
            if let Some(gap) = self.gaps.get(id) {
                blocks.extend(std::iter::repeat(None).take(gap.len));
            }
        }

        blocks
    }
}

fn checksum(blocks: impl Iterator<Item = (usize, usize)>) -> usize {
    blocks.map(|(pos, id)| pos * id).sum()
}

pub fn read_disk_map<P: AsRef<Path>>(path: P) -> Result<DiskMap> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_checksums() {
        let map: DiskMap = "2333133121414131402\n".parse().unwrap();
        assert_eq!(map.files.len(), 10);
        assert_eq!(map.compact_blocks_checksum(), 1928);
        assert_eq!(map.compact_files_checksum(), 2858);
    }

    #[test]
    fn short_map_layout() {
        let map: DiskMap = "12345".parse().unwrap();
        assert_eq!(
            map.blocks(),
            vec![
                Some(0),
                None,
                None,
                Some(1),
                Some(1),
                Some(1),
                None,
                None,
                None,
                None,
                Some(2),
                Some(2),
                Some(2),
                Some(2),
                Some(2),
            ]
        );
        // 022111222
        assert_eq!(map.compact_blocks_checksum(), 60);
    }

    #[test]
    fn whole_file_moves_left_only() {
        let map: DiskMap = "153".parse().unwrap();
        assert_eq!(map.compact_files_checksum(), 1 + 2 + 3);
        let map: DiskMap = "9053".parse().unwrap();
        assert_eq!(map.compact_files_checksum(), 9 + 10 + 11 + 12 + 13);
    }

    #[test]
    fn rejects_non_digit() {
        let err = "12a4".parse::<DiskMap>().unwrap_err();
        assert!(matches!(err, Error::InvalidDigit('a')));
    }
}
