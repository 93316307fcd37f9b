//! Interactive project setup: sequential prompts instead of flags.

use std::io::{BufRead, Write};

use crate::descriptor::ProjectDescriptor;

/// Collect a project descriptor by prompting on `output` and reading answers
/// from `input`. Empty answers fall back to the same defaults the flags use.
///
/// # Errors
///
/// Returns an error if reading an answer or writing a prompt fails.
pub fn collect_from<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> anyhow::Result<ProjectDescriptor> {
    let name = prompt(&mut input, &mut output, "Project name: ")?;
    let port = prompt(&mut input, &mut output, "Port [8080]: ")?;
    let router = prompt(
        &mut input,
        &mut output,
        "Router (gin, chi, echo, fiber, mux) [none]: ",
    )?;
    let database = prompt(
        &mut input,
        &mut output,
        "Database (postgres, mysql, mongodb, sqlite, cockroachdb, mariadb) [none]: ",
    )?;
    let entities_raw = prompt(&mut input, &mut output, "Entities, comma-separated [none]: ")?;

    let entities = entities_raw
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from)
        .collect();

    Ok(ProjectDescriptor {
        name,
        port: if port.is_empty() {
            "8080".to_string()
        } else {
            port
        },
        location: ".".to_string(),
        router,
        database,
        entities,
    })
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> anyhow::Result<String> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
