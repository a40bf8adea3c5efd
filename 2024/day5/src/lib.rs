use std::{
    cmp::Ordering,
    collections::HashSet,
    error,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Result;
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidRule(String),
    InvalidPage(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRule(s) => write!(f, "Invalid text({}) for page ordering rule.", s),
            Error::InvalidPage(s) => write!(f, "Invalid page number({}) in update.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub type Page = u32;

#[derive(Debug)]
pub struct PrintQueue {
    rules: HashSet<(Page, Page)>,
    updates: Vec<Vec<Page>>,
}

impl FromStr for PrintQueue {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut rules = HashSet::new();
        let mut updates = Vec::new();
        let mut lines = s.lines();
        for line in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }

            let (before, after) = line
                .split_once('|')
                .ok_or_else(|| Error::InvalidRule(line.to_string()))?;
            let parse_page = |s: &str| {
                s.trim()
                    .parse::<Page>()
                    .map_err(|_| Error::InvalidRule(line.to_string()))
            };
            rules.insert((parse_page(before)?, parse_page(after)?));
        }

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }

            let update = line
                .split(',')
                .map(|s| {
                    s.trim()
                        .parse::<Page>()
                        .map_err(|_| Error::InvalidPage(s.to_string()))
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            updates.push(update);
        }

        Ok(Self { rules, updates })
    }
}

impl PrintQueue {
    pub fn updates(&self) -> &[Vec<Page>] {
        &self.updates
    }

    pub fn is_ordered(&self, update: &[Page]) -> bool {
        update
            .windows(2)
            .all(|pair| self.compare(pair[0], pair[1]) != Ordering::Greater)
    }

    pub fn reorder(&self, update: &[Page]) -> Vec<Page> {
        let mut sorted = update.to_vec();
        sorted.sort_by(|l, r| self.compare(*l, *r));
        sorted
    }

    pub fn ordered_middle_sum(&self) -> Page {
        self.updates
            .iter()
            .filter(|update| self.is_ordered(update))
            .map(|update| middle_page(update))
            .sum()
    }

    pub fn reordered_middle_sum(&self) -> Page {
        self.updates
            .iter()
            .filter(|update| !self.is_ordered(update))
            .map(|update| middle_page(&self.reorder(update)))
            .sum()
    }

    fn compare(&self, l: Page, r: Page) -> Ordering {
        if self.rules.contains(&(l, r)) {
            Ordering::Less
        } else if self.rules.contains(&(r, l)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

fn middle_page(update: &[Page]) -> Page {
    update[update.len() / 2]
}

pub fn read_print_queue<P: AsRef<Path>>(path: P) -> Result<PrintQueue> {
    let text = utils::read_input(path)?;
    Ok(text.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../sample.txt");

    #[test]
    fn sample_middle_sums() {
        let queue: PrintQueue = SAMPLE.parse().unwrap();
        assert_eq!(queue.updates().len(), 6);
        assert_eq!(queue.ordered_middle_sum(), 143);
        assert_eq!(queue.reordered_middle_sum(), 123);
    }

    #[test]
    fn reorder_follows_rules() {
        let queue: PrintQueue = SAMPLE.parse().unwrap();
        assert_eq!(queue.reorder(&[75, 97, 47, 61, 53]), vec![97, 75, 47, 61, 53]);
        assert_eq!(queue.reorder(&[61, 13, 29]), vec![61, 29, 13]);
        assert_eq!(queue.reorder(&[97, 13, 75, 29, 47]), vec![97, 75, 47, 29, 13]);
    }

    #[test]
    fn unrelated_pages_count_as_ordered() {
        let queue: PrintQueue = "1|2\n\n3,4,5\n".parse().unwrap();
        assert!(queue.is_ordered(&[3, 4, 5]));
        assert_eq!(queue.ordered_middle_sum(), 4);
    }

    #[test]
    fn rejects_bad_rule() {
        let err = "47-53\n\n1,2,3\n".parse::<PrintQueue>().unwrap_err();
        assert!(matches!(err, Error::InvalidRule(_)));
    }
}
