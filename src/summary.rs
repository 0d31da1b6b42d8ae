use crate::results::{HeadingLevel, ResultRow};
use std::fmt;

/// Heading totals for one level, over successful rows only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingStats {
    pub total: usize,
    pub urls_with_headings: usize,
}

/// Aggregate statistics for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub headings: Vec<(HeadingLevel, HeadingStats)>,
}

impl Summary {
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        let pages: Vec<_> = rows.iter().filter_map(|r| r.metadata.as_ref()).collect();

        let headings = HeadingLevel::ALL
            .iter()
            .map(|&level| {
                let stats = pages.iter().fold(HeadingStats::default(), |mut acc, page| {
                    let count = page.headings(level).len();
                    acc.total += count;
                    if count > 0 {
                        acc.urls_with_headings += 1;
                    }
                    acc
                });
                (level, stats)
            })
            .collect();

        Self {
            total: rows.len(),
            successful: pages.len(),
            failed: rows.len() - pages.len(),
            headings,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total URLs processed: {}", self.total)?;
        writeln!(f, "Successful scrapes: {}", self.successful)?;
        write!(f, "Failed scrapes: {}", self.failed)?;

        if self.successful > 0 {
            write!(f, "\nHeading statistics:")?;
            for (level, stats) in &self.headings {
                write!(
                    f,
                    "\n{}: {} headings found across {} URLs",
                    level, stats.total, stats.urls_with_headings
                )?;
            }
        }
        Ok(())
    }
}
