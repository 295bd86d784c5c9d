use crate::error::{LexiconError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Keyword files are split by the first digit of the concept code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    ZeroOne,
    TwoThree,
    Four,
    FiveToEight,
    Nine,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::ZeroOne,
        Bucket::TwoThree,
        Bucket::Four,
        Bucket::FiveToEight,
        Bucket::Nine,
    ];

    /// Bucket for a code, `None` when the code does not start with a digit
    #[must_use]
    pub fn for_code(code: &str) -> Option<Self> {
        match code.chars().next()? {
            '0' | '1' => Some(Self::ZeroOne),
            '2' | '3' => Some(Self::TwoThree),
            '4' => Some(Self::Four),
            '5'..='8' => Some(Self::FiveToEight),
            '9' => Some(Self::Nine),
            _ => None,
        }
    }

    /// File name suffix, e.g. `5_6_7_8`
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::ZeroOne => "0_1",
            Self::TwoThree => "2_3",
            Self::Four => "4",
            Self::FiveToEight => "5_6_7_8",
            Self::Nine => "9",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The `code|keyword` lines of one language, grouped by [`Bucket`]
#[derive(Debug, Clone)]
pub struct KeywordBuckets {
    lang: String,
    lines: [Vec<String>; 5],
}

impl KeywordBuckets {
    /// Empty buckets for `lang`
    #[must_use]
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            lines: Default::default(),
        }
    }

    /// Read `<kw_root>/<lang>/kw_<lang>_<suffix>.txt` for every bucket
    pub fn load(kw_root: impl AsRef<Path>, lang: &str) -> Result<Self> {
        let dir = kw_root.as_ref().join(lang);
        let mut buckets = Self::new(lang);
        for bucket in Bucket::ALL {
            let path = dir.join(format!("kw_{lang}_{}.txt", bucket.suffix()));
            let text = fs::read_to_string(&path).map_err(|err| LexiconError::io(&path, err))?;
            buckets.lines[bucket.index()] = text.lines().map(str::to_string).collect();
        }
        log::info!(
            "Loaded {} {lang} keyword lines from {}",
            buckets.len(),
            dir.display()
        );
        Ok(buckets)
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Append `code|keyword` to the bucket of `code`
    pub fn add(&mut self, code: &str, keyword: &str) -> Result<Bucket> {
        let bucket = Bucket::for_code(code).ok_or_else(|| LexiconError::invalid_code(code))?;
        self.lines[bucket.index()].push(format!("{code}|{keyword}"));
        Ok(bucket)
    }

    /// Lines of one bucket in insertion order
    #[must_use]
    pub fn lines(&self, bucket: Bucket) -> &[String] {
        &self.lines[bucket.index()]
    }

    /// Lines of one bucket ordered by code, then keyword
    #[must_use]
    pub fn sorted(&self, bucket: Bucket) -> Vec<&str> {
        let mut lines: Vec<&str> = self.lines(bucket).iter().map(String::as_str).collect();
        lines.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Output path of one bucket: `<out_dir>/kws_<lang>_<suffix>.txt`
    #[must_use]
    pub fn output_path(&self, out_dir: &Path, bucket: Bucket) -> PathBuf {
        out_dir.join(format!("kws_{}_{}.txt", self.lang, bucket.suffix()))
    }

    /// Write every bucket, sorted, into `out_dir` (which must exist)
    pub fn write(&self, out_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let out_dir = out_dir.as_ref();
        let mut written = Vec::with_capacity(Bucket::ALL.len());
        for bucket in Bucket::ALL {
            let path = self.output_path(out_dir, bucket);
            let mut body = String::new();
            for line in self.sorted(bucket) {
                body.push_str(line);
                body.push('\n');
            }
            fs::write(&path, body).map_err(|err| LexiconError::io(&path, err))?;
            log::debug!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

/// `(code, keyword)` of a `code|keyword` line; a line without `|` has an empty keyword
fn sort_key(line: &str) -> (&str, &str) {
    let mut fields = line.split('|');
    let code = fields.next().unwrap_or_default();
    (code, fields.next().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_for_code() {
        assert_eq!(Bucket::for_code("0"), Some(Bucket::ZeroOne));
        assert_eq!(Bucket::for_code("11A11"), Some(Bucket::ZeroOne));
        assert_eq!(Bucket::for_code("31A3331"), Some(Bucket::TwoThree));
        assert_eq!(Bucket::for_code("41A"), Some(Bucket::Four));
        assert_eq!(Bucket::for_code("5"), Some(Bucket::FiveToEight));
        assert_eq!(Bucket::for_code("8"), Some(Bucket::FiveToEight));
        assert_eq!(Bucket::for_code("98B"), Some(Bucket::Nine));
        assert_eq!(Bucket::for_code("A1"), None);
        assert_eq!(Bucket::for_code(""), None);
    }

    #[test]
    fn test_add_rejects_non_digit_code() {
        let mut buckets = KeywordBuckets::new("en");
        let err = buckets.add("nan", "smoke").unwrap_err();
        assert!(matches!(err, LexiconError::InvalidCode(code) if code == "nan"));
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_sorted_by_code_then_keyword() {
        let mut buckets = KeywordBuckets::new("en");
        buckets.add("41", "tobacco").unwrap();
        buckets.add("4", "smoke").unwrap();
        buckets.add("41", "pipe").unwrap();
        buckets.add("41A", "ash").unwrap();

        assert_eq!(
            buckets.sorted(Bucket::Four),
            vec!["4|smoke", "41|pipe", "41|tobacco", "41A|ash"]
        );
        assert_eq!(buckets.lines(Bucket::Four)[0], "41|tobacco");
    }

    #[test]
    fn test_sort_key_without_separator() {
        assert_eq!(sort_key("41"), ("41", ""));
        assert_eq!(sort_key("41|a|b"), ("41", "a"));
    }
}
