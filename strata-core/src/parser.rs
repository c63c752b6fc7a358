//! Job config schema parser
//!
//! Parses the keyword-per-line job config format into [`JobContent`].
//! Each non-empty line is a keyword followed by whitespace-separated
//! arguments; `--` starts a comment that runs to the end of the line.
//!
//! The recognized schema is fixed: `MIN_ARG`, `MAX_ARG`, `ARG_TYPE`,
//! `EXECUTABLE`, `STOP_ON_FAIL`, plus the deprecated `SCRIPT` and
//! `INTERNAL`. Anything else is a parse error.

use crate::arg_type::ArgType;
use crate::content::{JobContent, Location, Spanned};
use crate::error::ConfigParseError;
use std::fs;
use std::path::Path;

/// Parse a job config file from disk.
///
/// # Errors
/// Returns [`ConfigParseError`] if the file cannot be read or any line
/// fails the schema.
pub fn parse_job_file(path: &Path) -> Result<JobContent, ConfigParseError> {
    let source = fs::read_to_string(path).map_err(|source| ConfigParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_job_source(&source, path)
}

/// Parse job config source text, attributing locations to `file`.
pub fn parse_job_source(source: &str, file: &Path) -> Result<JobContent, ConfigParseError> {
    let mut content = JobContent::default();

    for (index, raw_line) in source.lines().enumerate() {
        let line = match raw_line.find("--") {
            Some(comment) => &raw_line[..comment],
            None => raw_line,
        };

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();
        let location = Location::new(file, index as u32 + 1);

        match keyword {
            "MIN_ARG" => {
                let value = parse_usize("MIN_ARG", single("MIN_ARG", &args, &location)?, &location)?;
                content.min_args = Some(Spanned::new(value, location));
            }
            "MAX_ARG" => {
                let value = parse_usize("MAX_ARG", single("MAX_ARG", &args, &location)?, &location)?;
                content.max_args = Some(Spanned::new(value, location));
            }
            "ARG_TYPE" => {
                if args.len() != 2 {
                    return Err(ConfigParseError::ArgumentCount {
                        keyword: "ARG_TYPE",
                        expected: 2,
                        found: args.len(),
                        location,
                    });
                }
                let position = parse_usize("ARG_TYPE", args[0], &location)?;
                let kind: ArgType =
                    args[1]
                        .parse()
                        .map_err(|err| ConfigParseError::InvalidValue {
                            keyword: "ARG_TYPE",
                            value: args[1].to_string(),
                            reason: format!("{err}"),
                            location: location.clone(),
                        })?;
                content
                    .arg_types
                    .push(Spanned::new((position, kind), location));
            }
            "EXECUTABLE" => {
                let value = single("EXECUTABLE", &args, &location)?.to_string();
                content.executable = Some(Spanned::new(value, location));
            }
            "STOP_ON_FAIL" => {
                let value = parse_bool(
                    "STOP_ON_FAIL",
                    single("STOP_ON_FAIL", &args, &location)?,
                    &location,
                )?;
                content.stop_on_fail = Some(Spanned::new(value, location));
            }
            "SCRIPT" => {
                let value = single("SCRIPT", &args, &location)?.to_string();
                content.script = Some(Spanned::new(value, location));
            }
            "INTERNAL" => {
                let value =
                    parse_bool("INTERNAL", single("INTERNAL", &args, &location)?, &location)?;
                content.internal = Some(Spanned::new(value, location));
            }
            other => {
                return Err(ConfigParseError::UnknownKeyword {
                    keyword: other.to_string(),
                    location,
                });
            }
        }
    }

    Ok(content)
}

fn single<'a>(
    keyword: &'static str,
    args: &[&'a str],
    location: &Location,
) -> Result<&'a str, ConfigParseError> {
    match args {
        [value] => Ok(value),
        _ => Err(ConfigParseError::ArgumentCount {
            keyword,
            expected: 1,
            found: args.len(),
            location: location.clone(),
        }),
    }
}

fn parse_usize(
    keyword: &'static str,
    value: &str,
    location: &Location,
) -> Result<usize, ConfigParseError> {
    value
        .parse()
        .map_err(|_| ConfigParseError::InvalidValue {
            keyword,
            value: value.to_string(),
            reason: "expected a non-negative integer".to_string(),
            location: location.clone(),
        })
}

fn parse_bool(
    keyword: &'static str,
    value: &str,
    location: &Location,
) -> Result<bool, ConfigParseError> {
    match value.to_ascii_uppercase().as_str() {
        "TRUE" => Ok(true),
        "FALSE" => Ok(false),
        _ => Err(ConfigParseError::InvalidValue {
            keyword,
            value: value.to_string(),
            reason: "expected TRUE or FALSE".to_string(),
            location: location.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<JobContent, ConfigParseError> {
        parse_job_source(source, Path::new("TEST_JOB"))
    }

    #[test]
    fn test_parse_full_config() {
        let content = parse(
            r#"
            -- a job that copies wells
            MIN_ARG 1
            MAX_ARG 3
            ARG_TYPE 0 INT
            ARG_TYPE 2 BOOL
            EXECUTABLE /usr/bin/copy_wells
            STOP_ON_FAIL TRUE
            "#,
        )
        .unwrap();

        assert_eq!(content.min_args.as_ref().unwrap().value, 1);
        assert_eq!(content.max_args.as_ref().unwrap().value, 3);
        assert_eq!(
            content.arg_type_pairs(),
            vec![(0, ArgType::Int), (2, ArgType::Bool)]
        );
        assert_eq!(
            content.executable.as_ref().unwrap().value,
            "/usr/bin/copy_wells"
        );
        assert_eq!(content.stop_on_fail.as_ref().unwrap().value, true);
        assert!(content.script.is_none());
        assert!(content.internal.is_none());
    }

    #[test]
    fn test_parse_empty_source() {
        assert_eq!(parse("").unwrap(), JobContent::default());
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let content = parse("-- nothing here\n\nMIN_ARG 2 -- trailing comment\n").unwrap();
        assert_eq!(content.min_args.unwrap().value, 2);
    }

    #[test]
    fn test_locations_are_recorded() {
        let content = parse("MIN_ARG 1\n\nSCRIPT old.lua\n").unwrap();
        assert_eq!(content.min_args.unwrap().location.line, 1);
        let script = content.script.unwrap();
        assert_eq!(script.location.line, 3);
        assert_eq!(script.location.file, Path::new("TEST_JOB"));
    }

    #[test]
    fn test_repeated_keyword_keeps_last() {
        let content = parse("MAX_ARG 1\nMAX_ARG 5\n").unwrap();
        assert_eq!(content.max_args.unwrap().value, 5);
    }

    #[test]
    fn test_unknown_keyword() {
        let err = parse("WORKERS 4\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigParseError::UnknownKeyword { ref keyword, .. } if keyword == "WORKERS"
        ));
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = parse("ARG_TYPE 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigParseError::ArgumentCount {
                keyword: "ARG_TYPE",
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_integer() {
        let err = parse("MIN_ARG many\n").unwrap_err();
        assert!(err.to_string().contains("MIN_ARG"));
        assert!(err.to_string().contains("many"));
    }

    #[test]
    fn test_invalid_bool() {
        let err = parse("INTERNAL yes\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigParseError::InvalidValue {
                keyword: "INTERNAL",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_arg_type_is_rejected() {
        let err = parse("ARG_TYPE 0 TUPLE\n").unwrap_err();
        assert!(err.to_string().contains("unknown argument type 'TUPLE'"));
    }

    #[test]
    fn test_bools_are_case_insensitive() {
        let content = parse("STOP_ON_FAIL false\nINTERNAL True\n").unwrap();
        assert_eq!(content.stop_on_fail.unwrap().value, false);
        assert_eq!(content.internal.unwrap().value, true);
    }
}
