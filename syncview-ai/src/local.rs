//! Local fallbacks used when no AI service is configured

use syncview_core::{Sentiment, SentimentResponse};

const POSITIVE_KEYWORDS: &[(&str, u32)] = &[
    // success / achievement
    ("success", 3), ("successful", 3), ("achieve", 3), ("achieved", 3),
    ("accomplishment", 3), ("breakthrough", 3), ("triumph", 3),
    // winning
    ("win", 3), ("wins", 3), ("won", 3), ("victory", 3), ("champion", 3),
    // positive change
    ("progress", 2), ("improve", 2), ("improved", 2), ("improvement", 2),
    ("growth", 2), ("rise", 2), ("rose", 2), ("rising", 2), ("increase", 2),
    ("gain", 2), ("surge", 2), ("boost", 2), ("recover", 2), ("recovery", 2),
    ("deal", 2), ("deals", 2), ("blockbuster", 2), ("record", 2), ("historic", 2),
    // positive assessment
    ("excellent", 2), ("outstanding", 2), ("remarkable", 2), ("impressive", 2),
    ("positive", 2), ("optimistic", 2), ("favorable", 2), ("promising", 2),
    // general
    ("good", 1), ("great", 1), ("better", 1), ("best", 1), ("wonderful", 1),
    ("fantastic", 1), ("amazing", 1), ("happy", 1), ("pleased", 1), ("hope", 1),
    ("peace", 1), ("celebrate", 1), ("celebration", 1), ("joy", 1), ("love", 1),
    ("support", 1), ("help", 1), ("agreement", 1), ("cooperation", 1),
    ("agree", 1), ("agreed", 1), ("welcome", 1), ("welcomes", 1), ("welcomed", 1),
    ("benefit", 1), ("benefits", 1), ("opportunity", 1), ("opportunities", 1),
];

const NEGATIVE_KEYWORDS: &[(&str, u32)] = &[
    // violence / disaster
    ("kill", 3), ("killed", 3), ("death", 3), ("deaths", 3), ("die", 3), ("died", 3),
    ("attack", 3), ("attacked", 3), ("war", 3), ("bomb", 3), ("bombard", 3),
    ("explosion", 3), ("disaster", 3), ("tragedy", 3), ("crisis", 3),
    ("emergency", 3), ("terror", 3), ("terrorism", 3), ("violence", 3),
    // crime / accidents
    ("murder", 3), ("crash", 3), ("accident", 3), ("fire", 3), ("flood", 3),
    ("earthquake", 3), ("storm", 3), ("hurricane", 3), ("deadly", 3),
    ("shooting", 3), ("shot", 3), ("fighting", 3), ("fight", 3),
    // failure / loss
    ("fail", 2), ("failed", 2), ("failure", 2), ("loss", 2), ("lost", 2),
    ("lose", 2), ("defeat", 2), ("collapse", 2), ("decline", 2), ("fall", 2),
    ("drop", 2), ("decrease", 2), ("cut", 2), ("slash", 2),
    // negative assessment
    ("bad", 2), ("terrible", 2), ("awful", 2), ("worst", 2), ("worse", 2),
    ("poor", 2), ("negative", 2), ("pessimistic", 2), ("concern", 2),
    ("worry", 2), ("fear", 2), ("threat", 2), ("risk", 2), ("danger", 2),
    // general
    ("problem", 1), ("issue", 1), ("difficult", 1), ("challenge", 1),
    ("trouble", 1), ("conflict", 1), ("dispute", 1), ("protest", 1),
    ("angry", 1), ("sad", 1), ("disappointed", 1), ("sorry", 1),
];

/// Longest extractive summary produced locally, before the trailing `...`
const MAX_LOCAL_SUMMARY_CHARS: usize = 500;

/// Neutral answer used for short input and upstream failures
pub fn neutral_sentiment() -> SentimentResponse {
    sentiment_response(Sentiment::Neutral, 0.5)
}

pub(crate) fn sentiment_response(sentiment: Sentiment, score: f64) -> SentimentResponse {
    SentimentResponse {
        sentiment: sentiment.as_str().to_string(),
        label: sentiment.display_label().to_string(),
        score: (score * 100.0).round() / 100.0,
    }
}

fn weighted_hits(text: &str, keywords: &[(&str, u32)]) -> u32 {
    keywords
        .iter()
        .filter(|(word, _)| text.contains(word))
        .map(|(_, weight)| weight)
        .sum()
}

/// Keyword-weighted sentiment tuned for news headlines
///
/// A label is only assigned when one side leads by at least two points.
pub fn keyword_sentiment(text: &str) -> SentimentResponse {
    let lowered = text.to_lowercase();
    let positive = weighted_hits(&lowered, POSITIVE_KEYWORDS);
    let negative = weighted_hits(&lowered, NEGATIVE_KEYWORDS);

    if positive > negative + 1 {
        sentiment_response(Sentiment::Positive, confidence(positive - negative))
    } else if negative > positive + 1 {
        sentiment_response(Sentiment::Negative, confidence(negative - positive))
    } else {
        neutral_sentiment()
    }
}

fn confidence(diff: u32) -> f64 {
    (0.55 + diff as f64 * 0.05).min(0.95)
}

/// First three sentences, capped at 500 characters
pub fn extractive_summary(text: &str) -> String {
    let delimiter = [". ", "! ", "? "]
        .into_iter()
        .find(|delimiter| text.contains(delimiter));

    let Some(delimiter) = delimiter else {
        return format!("{}...", truncate_chars(text, MAX_LOCAL_SUMMARY_CHARS));
    };

    // Pieces followed by the delimiter keep its punctuation; the tail stays as-is
    let mut pieces = text.split(delimiter).peekable();
    let mut sentences = Vec::new();
    while let Some(piece) = pieces.next() {
        if pieces.peek().is_some() {
            sentences.push(format!("{}{}", piece, delimiter.trim_end()));
        } else if !piece.is_empty() {
            sentences.push(piece.to_string());
        }
    }
    let summary = sentences
        .into_iter()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ");

    if summary.chars().count() > MAX_LOCAL_SUMMARY_CHARS {
        format!("{}...", truncate_chars(&summary, MAX_LOCAL_SUMMARY_CHARS))
    } else {
        summary
    }
}

pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
