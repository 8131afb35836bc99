use crate::domain::model::AnalysisResult;
use crate::domain::services::frequency::FrequencyAnalysis;
use crate::domain::services::tokenizer::Tokenizer;
use crate::utils::error::{PhilologyError, Result};
use chrono::SecondsFormat;

const WIDTH: usize = 70;

const METHODOLOGY: [&str; 5] = [
    "This analysis implements the computational framework",
    "described in: Zahid, M. (2026). Computational Framework",
    "for the Descriptive Analysis and Digital Preservation",
    "of Classical Urdu Poetry. Liberal Journal of Language",
    "& Literature Review, 4(1).",
];

pub fn render_analysis_report(result: &AnalysisResult) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let mut report = vec![
        heavy.clone(),
        "URDU POETRY QUANTITATIVE ANALYSIS REPORT".to_string(),
        heavy.clone(),
        String::new(),
        format!("Source: {}", result.origin),
        format!(
            "Generated: {}",
            result.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        format!(
            "Encoding: {} (Urdu characters: {}, {:.1}%)",
            result.verification.encoding_status,
            result.verification.rtl_check.urdu_char_count,
            result.verification.rtl_check.urdu_percentage
        ),
        String::new(),
        format!("Lines: {}", result.stats.total_lines),
        format!(
            "Couplets: {} ({} complete)",
            result.couplets.len(),
            result.couplets.iter().filter(|c| c.is_complete()).count()
        ),
        format!(
            "Average line length: {:.1} characters",
            result.stats.avg_line_length
        ),
        format!("Total words analyzed: {}", result.frequency.total_words),
        format!("Unique vocabulary: {}", result.frequency.unique_words),
        format!(
            "Lexical richness (TTR): {:.3}",
            result.frequency.type_token_ratio
        ),
        format!("Punctuation marks: {}", result.punctuation_count),
        String::new(),
        "WORD FREQUENCY DISTRIBUTION:".to_string(),
        light.clone(),
    ];

    for entry in result.frequency.by_count_desc() {
        report.push(format!("  {:<15} {:>3}", entry.word, entry.count));
    }

    if !result.significant_words.is_empty() {
        report.push(String::new());
        report.push("THEMATIC VOCABULARY:".to_string());
        report.push(light.clone());
        for item in &result.significant_words {
            report.push(format!(
                "  {:<10} {:<6} {}",
                item.word, item.count, item.interpretation
            ));
        }
    }

    report.push(String::new());
    report.push("REPEATED PHRASES:".to_string());
    report.push(light);
    if result.repeated_phrases.is_empty() {
        report.push("  No significant phrase repetition detected.".to_string());
    } else {
        for phrase in &result.repeated_phrases {
            report.push(format!("  \"{}\": {} times", phrase.phrase, phrase.count));
        }
    }

    report.push(String::new());
    report.push("RESEARCH METHODOLOGY:".to_string());
    report.extend(METHODOLOGY.iter().map(|line| line.to_string()));

    report.push(String::new());
    report.push(heavy);
    report.join("\n")
}

pub fn render_tokenization_report(
    text: &str,
    tokens: &[String],
    tokenizer: &Tokenizer,
    top_n: usize,
) -> String {
    let rule = "-".repeat(WIDTH);
    let mut report = vec![
        rule.clone(),
        "DETAILED TOKENIZATION REPORT".to_string(),
        rule,
        format!("Original text: {}", text),
        format!("Character count: {}", text.chars().count()),
        format!("Token count: {}", tokens.len()),
        String::new(),
        "Token-by-token analysis:".to_string(),
    ];

    for (i, token) in tokens.iter().enumerate() {
        report.push(format!(
            "  Token {:2}: '{}' ({})",
            i + 1,
            token,
            tokenizer.classify(token)
        ));
    }

    let analysis = FrequencyAnalysis::from_tokens(tokenizer.words(tokens));
    report.push(String::new());
    report.push(format!("Word frequency (top {}):", top_n));
    for entry in analysis.most_common(top_n) {
        report.push(format!("  '{}': {} times", entry.word, entry.count));
    }

    report.join("\n")
}

pub fn frequencies_csv(analysis: &FrequencyAnalysis) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["word", "count"])?;
    for entry in analysis.by_count_desc() {
        writer.write_record([entry.word.as_str(), entry.count.to_string().as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PhilologyError::processing(format!("CSV flush failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| PhilologyError::processing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::corpus::Corpus;
    use crate::domain::services::tokenizer::TokenizeMode;
    use crate::domain::services::unicode::UnicodeVerifier;

    fn small_result(content: &str) -> AnalysisResult {
        let corpus = Corpus::from_content(content);
        let frequency = FrequencyAnalysis::from_tokens(content.split_whitespace());
        AnalysisResult {
            origin: "memory".to_string(),
            generated_at: chrono::Utc::now(),
            verification: UnicodeVerifier::new().verify(content),
            couplets: corpus.couplets(),
            stats: corpus.stats(),
            most_common: frequency.most_common(3),
            token_count: frequency.total_words,
            frequency,
            corpus,
            punctuation_count: 0,
            significant_words: Vec::new(),
            repeated_phrases: Vec::new(),
        }
    }

    #[test]
    fn test_analysis_report_cites_methodology_before_closing_rule() {
        let report = render_analysis_report(&small_result("دل ہی تو ہے\nدرد سے بھر نہ آئے کیوں"));
        let lines: Vec<&str> = report.lines().collect();

        let heading = lines
            .iter()
            .position(|line| *line == "RESEARCH METHODOLOGY:")
            .unwrap();
        assert!(lines[heading + 2].contains("Zahid, M. (2026)"));
        assert_eq!(lines[heading + 5], "& Literature Review, 4(1).");
        assert_eq!(lines.last().unwrap(), &"=".repeat(70));
        assert!(report.contains("No significant phrase repetition detected."));
        assert!(heading > lines.iter().position(|l| *l == "REPEATED PHRASES:").unwrap());
    }

    #[test]
    fn test_frequencies_csv_sorted_by_count() {
        let analysis = FrequencyAnalysis::from_tokens("دل غم دل".split_whitespace());
        let csv = frequencies_csv(&analysis).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["word,count", "دل,2", "غم,1"]);
    }

    #[test]
    fn test_tokenization_report_labels_tokens() {
        let tokenizer = Tokenizer::urdu().unwrap();
        let text = "آپ کیسے ہیں؟";
        let tokens = tokenizer.tokenize(text, TokenizeMode::KeepPunctuation);
        let report = render_tokenization_report(text, &tokens, &tokenizer, 5);

        assert!(report.contains("Token count: 4"));
        assert!(report.contains("Token  1: 'آپ' (WORD)"));
        assert!(report.contains("Token  4: '؟' (PUNCTUATION)"));
        assert!(report.contains("'ہیں': 1 times"));
    }
}
