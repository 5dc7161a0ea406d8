//! Pretty output formatting.

use caseforge_core::feedback::FeedbackRecord;
use caseforge_core::image::ImageRecord;
use caseforge_core::inference::RefinedPrompt;

const RULE_WIDTH: usize = 40;

/// Format an image row for display.
pub fn format_image(image: &ImageRecord) -> String {
    format!(
        "{}\n  ID: {}\n  URL: {}\n  Saved: {}",
        image.description,
        image.id,
        image.url,
        image.updated_at.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Format image rows for display.
pub fn format_images(images: &[ImageRecord]) -> String {
    if images.is_empty() {
        return "No images found.".to_string();
    }
    let mut output = format!("IMAGES ({})\n", images.len());
    output.push_str(&"-".repeat(RULE_WIDTH));
    for image in images {
        output.push_str(&format!("\n{}\n", format_image(image)));
    }
    output
}

/// Format a refined prompt for display.
pub fn format_refined(refined: &RefinedPrompt) -> String {
    format!(
        "Prompt: {}\nRefined: {}\nKeywords: {}",
        refined.original_prompt,
        refined.refined_prompt,
        refined.keywords.join(", ")
    )
}

/// Format generated image URLs for display.
pub fn format_urls(urls: &[String]) -> String {
    if urls.is_empty() {
        return "No images generated.".to_string();
    }
    urls.join("\n")
}

/// Format a feedback entry for display.
pub fn format_feedback(record: &FeedbackRecord) -> String {
    let mut output = format!(
        "{} - rating {}\n  ID: {}",
        record.submitted_at.format("%Y-%m-%d %H:%M:%S"),
        record.rating,
        record.id
    );
    if let Some(tags) = &record.tags {
        output.push_str(&format!("\n  Tags: {}", tags.join(", ")));
    }
    if let Some(comments) = &record.comments {
        output.push_str(&format!("\n  Comments: {}", comments));
    }
    output
}

/// Format the feedback list of one image for display.
pub fn format_feedback_list(image_url: &str, records: &[FeedbackRecord]) -> String {
    if records.is_empty() {
        return format!("No feedback for {}.", image_url);
    }
    let mut output = format!("FEEDBACK ({}) {}\n", records.len(), image_url);
    output.push_str(&"-".repeat(RULE_WIDTH));
    for record in records {
        output.push_str(&format!("\n{}\n", format_feedback(record)));
    }
    output
}
