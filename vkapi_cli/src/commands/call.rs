use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use vkapi::{Client, Params, Verb};

use crate::output::{write_body, write_error_body, OutputFormat};

#[derive(Args)]
pub struct CallArgs {
    /// Method name, e.g. users.get
    pub method: String,

    /// Method parameter as key=value (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// HTTP verb: GET or POST
    #[arg(short = 'X', long = "request", default_value = "GET", value_parser = parse_verb)]
    pub verb: Verb,
}

pub async fn run(args: &CallArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let params: Params = args.params.iter().cloned().collect();
    tracing::info!("{} {} ({} params)", args.verb, args.method, params.len());

    let result = client.execute(args.verb, &args.method, &params).await;
    report(
        result,
        format,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

/// Prints a successful body to `out`. An API error prints its body to `err`
/// before the error itself is returned.
fn report(
    result: Result<Vec<u8>, vkapi::Error>,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match result {
        Ok(body) => write_body(out, &body, format),
        Err(e) => {
            if let Some(body) = e.body() {
                write_error_body(err, body)?;
            }
            Err(e.into())
        }
    }
}

/// Splits `key=value` on the first `=`. The value may be empty or contain `=`.
fn parse_param(s: &str) -> Result<(String, String)> {
    let Some((key, value)) = s.split_once('=') else {
        bail!("Invalid parameter '{}': expected key=value", s);
    };
    if key.is_empty() {
        bail!("Invalid parameter '{}': key must not be empty", s);
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_verb(s: &str) -> Result<Verb> {
    Ok(s.parse::<Verb>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_param_splits_on_first_equals() {
        assert_eq!(
            parse_param("user_ids=1,2").unwrap(),
            ("user_ids".to_string(), "1,2".to_string())
        );
        assert_eq!(
            parse_param("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_param("message=").unwrap(),
            ("message".to_string(), String::new())
        );
    }

    #[test]
    fn parse_param_rejects_malformed() {
        assert!(parse_param("no_equals").is_err());
        assert!(parse_param("=value").is_err());
    }

    #[test]
    fn parse_verb_accepts_get_and_post() {
        assert_eq!(parse_verb("get").unwrap(), Verb::Get);
        assert_eq!(parse_verb("POST").unwrap(), Verb::Post);
        assert!(parse_verb("PUT").is_err());
    }

    #[test]
    fn report_success_writes_body_to_out() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        report(
            Ok(br#"{"response":[1]}"#.to_vec()),
            OutputFormat::Raw,
            &mut out,
            &mut err,
        )
        .unwrap();
        assert_eq!(out, b"{\"response\":[1]}\n");
        assert!(err.is_empty());
    }

    #[test]
    fn report_api_error_writes_body_to_err_and_fails() {
        let body = br#"{"error":{"error_code":5,"error_msg":"User authorization failed"}}"#;
        let api_error = vkapi::Error::Api {
            code: 5,
            message: "User authorization failed".to_string(),
            request_params: vec![],
            body: body.to_vec(),
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let result = report(Err(api_error), OutputFormat::Json, &mut out, &mut err);

        let e = result.unwrap_err();
        assert_eq!(e.to_string(), "request error. [5] User authorization failed");
        assert!(out.is_empty());
        let mut expected = body.to_vec();
        expected.push(b'\n');
        assert_eq!(err, expected);
    }

    #[test]
    fn report_other_errors_write_nothing() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let result = report(
            Err(vkapi::Error::InvalidMethod),
            OutputFormat::Raw,
            &mut out,
            &mut err,
        );
        assert!(result.is_err());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }
}
