/// Fixed instruction prefix; the transcript text follows it directly.
pub const SUMMARY_INSTRUCTIONS: &str = "You are a YouTube video summarizer. \
You will be given the transcript text of a video. Summarize the entire video \
and provide the important points as a bulleted list within 250 words. \
Please provide the summary of the text given here: ";

/// Build the summary prompt for a video transcript.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!("{SUMMARY_INSTRUCTIONS}{transcript}")
}
