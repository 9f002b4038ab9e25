use fmt::Display;
use std::fmt::Formatter;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fmt, fs, io};

use chrono::NaiveDate;

use crate::text_utils::{parse_date, strip_single_quotes};

const DATE_LABEL: &str = "date: ";
const TITLE_LABEL: &str = "title: ";

pub struct PostMeta {
    pub file_name: PathBuf,
    pub link: String,
    pub date: NaiveDate,
    pub title: String,
}

impl Display for PostMeta {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "link={}, date={}, title={}, source={}",
               self.link,
               self.date,
               self.title,
               self.file_name.display()
        )
    }
}

/// Example of source document header
/// ---
/// title: 'What I learned after 20+ years'
/// author: Ken Kellner
/// date: 2022-04-02
/// ---
impl PostMeta {
    pub fn from(file_name: &PathBuf, link: &str) -> io::Result<PostMeta> {
        let content = match fs::read_to_string(file_name) {
            Ok(content) => content,
            Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening source document {}: {}", file_name.to_str().unwrap(), e))),
        };

        Self::from_string(file_name, &content, link)
    }

    pub fn from_string(file_name: &PathBuf, content: &str, link: &str) -> io::Result<PostMeta> {
        let date = match Self::extract_field(content, DATE_LABEL) {
            Some(value) => value,
            None => return Err(Self::missing_field(file_name, DATE_LABEL)),
        };

        let title = match Self::extract_field(content, TITLE_LABEL) {
            Some(value) => value,
            None => return Err(Self::missing_field(file_name, TITLE_LABEL)),
        };

        let date = match parse_date(date) {
            Ok(d) => Ok(d),
            Err(e) => {
                Err(io::Error::new(ErrorKind::InvalidData, format!("{} - file={}", e, file_name.to_str().unwrap())))
            }
        }?;

        let title = strip_single_quotes(title).to_string();

        Ok(PostMeta {
            file_name: file_name.clone(),
            link: link.to_string(),
            date,
            title,
        })
    }

    // First line containing the label wins; the value is everything after
    // the first ": " separator on that line.
    fn extract_field<'a>(content: &'a str, label: &str) -> Option<&'a str> {
        for line in content.lines() {
            if !line.contains(label) {
                continue;
            }
            if let Some((_, value)) = line.split_once(": ") {
                return Some(value.trim());
            }
        }
        None
    }

    fn missing_field(file_name: &PathBuf, label: &str) -> io::Error {
        io::Error::new(
            ErrorKind::InvalidData,
            format!("Missing \"{}\" line - file={}", label.trim_end(), file_name.to_str().unwrap()),
        )
    }
}
