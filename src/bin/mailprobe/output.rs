use anyhow::{Result, bail};
use mailprobe::VerificationReport;

pub fn write_report(report: &VerificationReport, format: &str) -> Result<()> {
    match format {
        "human" => {
            write_human(report);
            Ok(())
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(report)?);
            Ok(())
        }
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

fn write_human(report: &VerificationReport) {
    let tag = match report.exists {
        Some(true) => "[OK]     ",
        Some(false) => "[INVALID]",
        None => "[UNKNOWN]",
    };
    println!("{tag} {} :: {}", report.email, report.reason);
    if !report.format {
        return;
    }
    println!("        disposable: {}", flag(report.disposable));
    if let Some(mx) = &report.mx_server {
        println!("        mx: {mx}");
    }
    if let (Some(name), Some(role), Some(gender)) = (&report.name, report.role, report.gender) {
        println!("        name={name}, role={role}, gender={gender}");
    }
    if let Some(smtp) = &report.smtp {
        println!("        smtp: {}", smtp.detail);
        for line in &smtp.transcript {
            println!("          {line}");
        }
    }
}

fn flag(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}
