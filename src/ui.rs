use anyhow::{Context, Result};
use console::{Style, Term};
use pwd_forge::{KeywordKind, KeywordSet, StrengthReport, StrengthScore, Wordlist};
use rpassword::read_password;
use secrecy::SecretString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const SAMPLE_SIZE: usize = 50;

const METER_WIDTH: usize = 4;

const PROMPT_FIELDS: &[(KeywordKind, &str)] = &[
    (KeywordKind::Name, "Name"),
    (KeywordKind::Dob, "DOB/Year"),
    (KeywordKind::Pet, "Pet name"),
    (KeywordKind::Fav, "Favorite word"),
    (KeywordKind::Numbers, "Other numbers"),
    (KeywordKind::Phone, "Phone last digits"),
];

/// Values collected by the interactive front end.
pub struct InteractiveInput {
    pub password: Option<SecretString>,
    pub fields: Vec<(KeywordKind, String)>,
    pub generate: bool,
    pub output: PathBuf,
}

fn score_style(score: StrengthScore) -> Style {
    match score {
        StrengthScore::VeryWeak => Style::new().red().bold(),
        StrengthScore::Weak => Style::new().color256(208).bold(),
        StrengthScore::Fair => Style::new().yellow().bold(),
        StrengthScore::Strong => Style::new().green(),
        StrengthScore::VeryStrong => Style::new().green().bold(),
    }
}

fn meter(score: StrengthScore) -> String {
    let filled = score.value() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(METER_WIDTH - filled)
    )
}

fn header(title: &str) {
    println!();
    println!("{}", Style::new().bold().apply_to(format!("=== {} ===", title)));
}

pub fn display_analysis(estimator: &str, report: &StrengthReport) {
    let label = Style::new().dim();
    let style = score_style(report.score);

    header("Password Analysis");
    println!("{} {}", label.apply_to("Estimator:  "), estimator);
    println!(
        "{} {} {}",
        label.apply_to("Score (0-4):"),
        style.apply_to(report.score),
        style.apply_to(meter(report.score))
    );
    println!(
        "{} {:.2} bits",
        label.apply_to("Entropy:    "),
        report.entropy_bits()
    );
    println!(
        "{} {} (offline slow hashing, 1e4/s)",
        label.apply_to("Crack time: "),
        report.crack_time_display()
    );
    if !report.suggestions.is_empty() {
        println!(
            "{} {}",
            label.apply_to("Suggestions:"),
            report.suggestions.join(" | ")
        );
    }
    if let Some(warning) = &report.warning {
        println!(
            "{} {}",
            label.apply_to("Warning:    "),
            Style::new().yellow().apply_to(warning)
        );
    }
}

pub fn display_generation(keywords: &KeywordSet, wordlist: &Wordlist, show: bool) {
    header("Generating Wordlist");

    if keywords.is_empty() {
        println!("No keywords provided.");
    } else {
        let summary: Vec<String> = keywords
            .iter()
            .map(|k| format!("{}={}", k.kind, k.value))
            .collect();
        println!("Keywords: {}", summary.join(", "));
    }
    println!("Generated {} candidate words.", wordlist.len());

    if show && !wordlist.is_empty() {
        println!();
        println!("--- Sample words ---");
        for (i, word) in wordlist.iter().take(SAMPLE_SIZE).enumerate() {
            println!("{}. {}", i + 1, word);
        }
    }
}

pub fn display_export(written: usize, path: &Path) {
    println!(
        "Exported {} entries to {}",
        written,
        Style::new().bold().apply_to(path.display())
    );
}

pub fn display_error(err: &anyhow::Error) {
    let style = Style::new().red().bold();
    eprintln!("{} {}", style.apply_to("error:"), err);
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}

fn prompt_line(term: &Term, label: &str) -> Result<String> {
    term.write_str(&format!("{}: ", label))?;
    term.flush()?;
    let line = term.read_line()?;
    Ok(line.trim().to_string())
}

pub fn prompt_inputs(default_output: &Path) -> Result<InteractiveInput> {
    let term = Term::stdout();
    term.write_line(&Style::new().bold().apply_to("Password Analyzer & Wordlist Generator").to_string())?;

    print!("Password to analyze (empty to skip): ");
    io::stdout().flush()?;
    let password = read_password().context("Failed to read password")?;
    let password = if password.is_empty() {
        None
    } else {
        Some(SecretString::new(password.into()))
    };

    let mut fields = Vec::new();
    for (kind, label) in PROMPT_FIELDS {
        let value = prompt_line(&term, label)?;
        if !value.is_empty() {
            fields.push((*kind, value));
        }
    }

    let generate = if fields.is_empty() {
        false
    } else {
        let answer = prompt_line(&term, "Generate wordlist? [Y/n]")?.to_lowercase();
        answer.is_empty() || answer == "y" || answer == "yes"
    };

    let output = if generate {
        let answer = prompt_line(
            &term,
            &format!("Save as [{}]", default_output.display()),
        )?;
        if answer.is_empty() {
            default_output.to_path_buf()
        } else {
            PathBuf::from(answer)
        }
    } else {
        default_output.to_path_buf()
    };

    Ok(InteractiveInput {
        password,
        fields,
        generate,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_fill() {
        assert_eq!(meter(StrengthScore::VeryWeak), "[----]");
        assert_eq!(meter(StrengthScore::Fair), "[##--]");
        assert_eq!(meter(StrengthScore::VeryStrong), "[####]");
    }

    #[test]
    fn test_prompt_fields_cover_keyword_kinds() {
        let kinds: Vec<_> = PROMPT_FIELDS.iter().map(|(k, _)| *k).collect();
        assert!(kinds.iter().all(|k| *k != KeywordKind::Extra));
        assert_eq!(kinds.len(), 6);
    }
}
