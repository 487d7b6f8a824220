use std::fs::File;
use std::io::{BufRead, BufReader, Read, Split};
use std::path::Path;

use crate::domain::plan::PlanEvent;
use crate::domain::show::ShowDocument;
use crate::error::{AppError, AppResult};

fn open_plan_file(path: &Path) -> AppResult<File> {
    File::open(path).map_err(|source| AppError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a whole `terraform show -json` document.
pub fn read_show_document(path: &Path) -> AppResult<ShowDocument> {
    let mut contents = Vec::new();
    open_plan_file(path)?.read_to_end(&mut contents)?;

    ShowDocument::from_slice(&contents).map_err(|source| AppError::Decode {
        line: source.line(),
        source,
    })
}

/// Reads a `terraform plan -json` file one event per line.
///
/// Iteration yields events in file order. The first line that is not a valid
/// event (bad JSON or bad UTF-8) yields an error; callers are expected to stop
/// there.
pub struct PlanStreamReader<R> {
    lines: Split<R>,
    line: usize,
}

impl PlanStreamReader<BufReader<File>> {
    pub fn open(path: &Path) -> AppResult<Self> {
        Ok(Self::new(BufReader::new(open_plan_file(path)?)))
    }
}

impl<R: BufRead> PlanStreamReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for PlanStreamReader<R> {
    type Item = AppResult<PlanEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = match self.lines.next()? {
            Ok(line) => line,
            Err(err) => return Some(Err(AppError::Io(err))),
        };
        self.line += 1;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        Some(PlanEvent::from_slice(&line).map_err(|source| AppError::Decode {
            line: self.line,
            source,
        }))
    }
}
