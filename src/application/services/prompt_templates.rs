//! Prompt templates for the structuring passes.
//!
//! Kept as plain data with a single `{text}` slot so the pipeline stays
//! substitutable across LLM providers. The map prompt is identical for every
//! chunk; no prompt is conditioned on a chunk's position.

const SINGLE_PASS_TEMPLATE: &str = "\
You are an expert editor and technical writer. Your task is to transform \
unstructured text into a perfectly organized, easy-to-read document.

Follow these guidelines strictly:
1. Analyze the input text to identify main topics, sections, and key points.
2. Create a logical hierarchy using Markdown formatting:
   - Use # Headers for main titles
   - Use ## Subheaders for major sections
   - Use ### Subsubheaders for sub-sections
   - Use bullet points (- or *) for lists and key points
   - Use **bold** for key terms and important concepts
   - Use italics for definitions or subtle emphasis
3. Maintain all crucial information from the source text.
4. Improve readability by breaking down long paragraphs and removing redundancy.
5. Ensure the output is comprehensive yet concise.

Here is the text to structure:
{text}";

const MAP_TEMPLATE: &str = "\
Extract and structure the key information from this section of a document. \
Use clear headings and bullet points. Here is the section:

{text}";

const REDUCE_TEMPLATE: &str = "\
You are synthesizing a complete structured document from multiple sections. \
Combine these structured sections into a single, coherent, well-organized \
document. Ensure consistent formatting and logical flow throughout. \
Sections to combine:

{text}";

pub fn single_pass_prompt(text: &str) -> String {
    SINGLE_PASS_TEMPLATE.replace("{text}", text)
}

pub fn map_prompt(text: &str) -> String {
    MAP_TEMPLATE.replace("{text}", text)
}

pub fn reduce_prompt(text: &str) -> String {
    REDUCE_TEMPLATE.replace("{text}", text)
}
