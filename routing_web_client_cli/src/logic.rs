use crate::DEFAULT_BASE_URL;
use futures::future::join_all;
use routing_common::cli::constants::*;
use routing_common::cli::helpers::*;
use routing_common::requests::*;
use reqwest::{header, Client, StatusCode, Url};
use std::error::Error;
use std::io::{stdin, stdout, BufRead, Write};

pub async fn main_loop(base_url: Url) -> Result<(), Box<dyn Error>> {
    run(base_url, &mut stdin().lock(), &mut stdout()).await
}

/// **Reads and executes commands until `quit` or the end of input**
async fn run<R: BufRead, W: Write>(
    base_url: Url,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    let client = Client::new();

    loop {
        let line = match read_input(input, output, PROMPT)? {
            Input::Line(line) => line,
            Input::Empty => continue,
            Input::Eof => break,
        };

        let words = line.split_whitespace().collect::<Vec<_>>();
        let cmd = words[0].to_lowercase();

        match cmd.as_str() {
            HELP | "h" => help(),
            VALIDATE | "v" => validate(words, &client, &base_url).await?,
            BATCH | "b" => batch(words, &client, &base_url).await?,
            HEALTH | "r" => health(&client, &base_url).await?,
            QUIT | "q" => break,
            _ => println!("Unrecognized command; try `help`."),
        }
    }

    Ok(())
}

/// **Get base URL**
///
/// Tries to create a URL from the provided argument.
///
/// If that is not possible, falls back to a default.
///
/// It returns a URL in any case.
///
/// This is meant to be a base URL for all operations.
///
/// - If the provided argument is the `None` variant,
///   returns a default value as the base URL.
/// - If it's a `String`, tries to parse it into URL.
///   - If it's a valid URL string, returns it as URL.
///   - If it's a malformed URL string, returns the default.
///
/// The default value is [`DEFAULT_BASE_URL`].
pub fn get_base_url(base_url: Option<String>) -> Url {
    let base_url = base_url.unwrap_or_else(|| {
        println!(
            "No CLI base URL provided; using default: {}",
            DEFAULT_BASE_URL
        );
        DEFAULT_BASE_URL.into()
    });

    Url::parse(base_url.as_str()).unwrap_or_else(|_| {
        println!(
            "Provided base URL could not be parsed; using default: {}",
            DEFAULT_BASE_URL
        );
        Url::parse(DEFAULT_BASE_URL).expect("The default base URL is valid.")
    })
}

/// **Renders a validation answer as one line**
fn describe(status: StatusCode, response: &ValidationResponse) -> String {
    if response.valid {
        format!(
            "Valid: {} - {}",
            response.bank_name.as_deref().unwrap_or_default(),
            response.address.as_deref().unwrap_or_default()
        )
    } else {
        let message = response.message.as_deref().unwrap_or_default();
        if status == StatusCode::OK {
            format!("Invalid: {message}")
        } else {
            format!("Invalid ({status}): {message}")
        }
    }
}

/// **Sends one POST request to `/validate` and describes the answer**
///
/// The service answers every validation outcome with the same JSON shape,
/// whatever the status; anything else is reported as an error line.
async fn validation_request(
    client: &Client,
    url: Url,
    request: &ValidationRequest,
) -> Result<String, reqwest::Error> {
    let response = client
        .post(url)
        .header(
            header::USER_AGENT,
            header::HeaderValue::from_static("routing_web_client_cli"),
        )
        .json(request)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;

    let line = match parse_reply(&text) {
        Some(body) => describe(status, &body),
        None => format!("[ERROR] {status} \"{text}\""),
    };

    Ok(line)
}

fn parse_reply(text: &str) -> Option<ValidationResponse> {
    serde_json::from_str(text).ok()
}

/// **Validate a routing number and an account number**
///
/// The command: `validate <routing number> <account number>`
///
/// Both numbers are sent as typed; the service checks their format.
async fn validate(words: Vec<&str>, client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    let Some(request) = parse_request(&words[1..]) else {
        println!("The validate command: {VALIDATE} <routing number> <account number>");
        return Ok(());
    };

    let url = base_url.join("validate")?;
    println!("{}", validation_request(client, url, &request).await?);

    Ok(())
}

/// **Parses the lines of a batch file**
///
/// Each non-empty line holds `<routing number> <account number>`.
/// Lines that don't are reported and left out.
fn parse_batch(contents: &str) -> Vec<(usize, ValidationRequest)> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| {
            let words = line.split_whitespace().collect::<Vec<_>>();
            match parse_request(&words) {
                Some(request) => Some((idx + 1, request)),
                None => {
                    eprintln!("[ERROR] Line {}: expected two numbers, got \"{}\"", idx + 1, line);
                    None
                }
            }
        })
        .collect()
}

/// **Validate every line of a file**
///
/// The command: `batch <file>`
///
/// All requests are sent at once; the answers are printed in the order of the file.
async fn batch(words: Vec<&str>, client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    if words.len() != 2 {
        println!("The batch command: {BATCH} <file with one 'routing account' pair per line>");
        return Ok(());
    }

    let contents = match std::fs::read_to_string(words[1]) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("[ERROR] Cannot read \"{}\": {}", words[1], err);
            return Ok(());
        }
    };

    let requests = parse_batch(&contents);
    let url = base_url.join("validate")?;

    let answers = join_all(
        requests
            .iter()
            .map(|(_, request)| validation_request(client, url.clone(), request)),
    )
    .await;

    for ((line_no, request), answer) in requests.iter().zip(answers) {
        let routing_number = request.routing_number.as_deref().unwrap_or_default();
        match answer {
            Ok(line) => println!("{line_no}: {routing_number}: {line}"),
            Err(err) => eprintln!("[ERROR] {line_no}: {routing_number}: {err}"),
        }
    }

    Ok(())
}

/// **Show whether the service has loaded its bank table**
async fn health(client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    let url = base_url.join("health")?;
    let response = client.get(url).send().await?;

    let status = response.status();
    match response.json::<HealthResponse>().await {
        Ok(health) if health.ready => println!("Ready: {} banks loaded.", health.banks),
        Ok(_) => println!("Not ready yet: the bank table is still loading."),
        Err(err) => eprintln!("[ERROR] {status}: {err}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{describe, get_base_url, parse_batch, run};
    use crate::DEFAULT_BASE_URL;
    use reqwest::StatusCode;
    use routing_common::ValidationResponse;

    #[test]
    fn test_default_url_none() {
        assert_eq!(get_base_url(None).to_string(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_default_url_empty() {
        assert_eq!(
            get_base_url(Some("".to_string())).to_string(),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_default_url_bad() {
        assert_eq!(
            get_base_url(Some("https://333.333.333.333".to_string())).to_string(),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_valid_url() {
        assert_eq!(
            get_base_url(Some("http://127.0.0.1:3333".to_string())).to_string(),
            "http://127.0.0.1:3333/"
        );
    }

    #[test]
    fn test_describe_valid() {
        let response = ValidationResponse::valid(
            "JPMORGAN CHASE".to_string(),
            "1 Chase Plaza, New York, NY".to_string(),
        );
        assert_eq!(
            describe(StatusCode::OK, &response),
            "Valid: JPMORGAN CHASE - 1 Chase Plaza, New York, NY"
        );
    }

    #[test]
    fn test_describe_invalid() {
        let response = ValidationResponse::invalid("Invalid routing number.");
        assert_eq!(
            describe(StatusCode::OK, &response),
            "Invalid: Invalid routing number."
        );

        let response = ValidationResponse::invalid("Server still loading data. Try again.");
        assert_eq!(
            describe(StatusCode::SERVICE_UNAVAILABLE, &response),
            "Invalid (503 Service Unavailable): Server still loading data. Try again."
        );
    }

    #[test]
    fn test_parse_batch() {
        let contents = "021000021 12345678\n\n  \nbroken\n999999999 87654321\n";
        let requests = parse_batch(contents);

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].0, 1);
        assert_eq!(requests[1].0, 5);
        assert_eq!(
            requests[1].1.routing_number.as_deref(),
            Some("999999999")
        );
    }

    #[tokio::test]
    async fn test_loop_ends_at_end_of_input() {
        let mut output = Vec::new();
        run(get_base_url(None), &mut "".as_bytes(), &mut output)
            .await
            .unwrap();
        assert_eq!(output, b"\n> ");
    }

    #[tokio::test]
    async fn test_loop_skips_blank_lines_and_unknown_commands() {
        let mut output = Vec::new();
        run(get_base_url(None), &mut "\n  \nhelp\nnonsense\n".as_bytes(), &mut output)
            .await
            .unwrap();
        assert_eq!(output, "\n> ".repeat(5).as_bytes());
    }

    #[tokio::test]
    async fn test_loop_stops_at_quit() {
        let mut output = Vec::new();
        run(get_base_url(None), &mut "q\nhelp\n".as_bytes(), &mut output)
            .await
            .unwrap();
        assert_eq!(output, b"\n> ");
    }
}
