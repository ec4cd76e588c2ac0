//! Prompt construction and cleanup of the model's reply.

use crate::core::models::HighlightContext;

/// Persona sent as the Gemini system instruction on every request.
pub const SYSTEM_INSTRUCTION: &str = "Hi, you are a smart shopping assistant. Every single decision you make \
should be based on finding the best, factual, unbiased information on what \
a user wants to buy. This also applies to specific features/attributes of a product \
they may be looking for. Always:
    - Avoid opening/closing remarks, or fluffy ai intros/outros. Go straight to point.
    - Back your statements with factual information from your tools.
    - Respond in a clear, concise language.
    - Make use of the metadata provided in the user's prompt, it gives you context
    on the task at hand.";

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

/// Builds the user prompt asking for the fixed-shape insight object.
///
/// The output is deterministic for a given highlight.
#[must_use]
pub fn build_prompt(ctx: &HighlightContext) -> String {
    let page_url = or_none(ctx.url.as_deref());
    let title = or_none(ctx.page_title.as_deref());
    let description = or_none(ctx.page_description.as_deref());
    let selected_text = or_none(ctx.selected_text.as_deref());
    let full_context = or_none(ctx.full_context.as_deref());
    let time_date = or_none(ctx.timestamp.as_deref());

    format!(
        r#"A user on this page {page_url} which does this {description}
highlighted a text "{selected_text}". You are to output information in this EXACT format:

{{
    "type": "[if {selected_text} contains a product or feature, set to a 'product' or 'feature', else 'other']",
    "youtube_search_keyword": "[a single keyword or group of words to find a relevant YouTube video about {selected_text}]",
    "similar_products_keyword": "[a single keyword or group of words to find similar products or features on the web]",
    "summary": "[About 4 sentences explaining what {selected_text} is.]",

    "reviews": [
        "[Review insight 1]",
        "[Review insight 2]"
    ],

    "cons": [
        "[Con 1]",
        "[Con 2]",
        "[Con 3]",
        "[Con 4]",
        "[Con 5]"
    ],

    "workarounds_and_maintenance": [
        "[Tip 1]",
        "[Tip 2]",
        "[Tip 3]",
        "[Tip 4]",
        "[Tip 5]",
        "[Tip 6]"
    ]
}}

Reviews should be a summary of insights from the web. Cons are the factors that would prevent
the user from getting adequate value, or comfort. Workarounds and Maintenance are simply tooltips.
In the case of 'other', just provide generic information about the highlighted text while following
the format above.

You might need these for context:
Time and Date: {time_date},
Full Context: {full_context},
Page Title: {title},
Page Description: {description}

Return ONLY valid JSON, no markdown formatting or extra text."#
    )
}

/// Removes a surrounding markdown code fence from the model's reply.
///
/// Accepts a "```json" or bare "```" opener and a "```" closer; either may be
/// missing. Surrounding whitespace is trimmed.
#[must_use]
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}
