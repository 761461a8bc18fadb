use tsum_core::Mode;

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn render_index(default_model: &str, model_choices: &[String]) -> String {
    let options: String = model_choices
        .iter()
        .map(|name| {
            let selected = if name == default_model { " selected" } else { "" };
            format!(
                "<option value=\"{0}\"{1}>{0}</option>",
                escape_html(name),
                selected
            )
        })
        .collect();

    format!(
        "<!doctype html>\n<html>\n<head><title>Text Summarizer</title></head>\n<body>\n\
         <h1>Text Summarizer</h1>\n\
         <form action=\"/summarize\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <p>Mode:\n\
         <label><input type=\"radio\" name=\"mode\" value=\"abstractive\" checked> abstractive</label>\n\
         <label><input type=\"radio\" name=\"mode\" value=\"extractive\"> extractive</label></p>\n\
         <p><label>Abstractive model (only used for abstractive):\n\
         <select name=\"model\">{options}</select></label></p>\n\
         <p><label>Upload text files (optional):\n\
         <input type=\"file\" name=\"files\" accept=\".txt\" multiple></label></p>\n\
         <p><label>Or paste text here:<br>\n\
         <textarea name=\"text\" rows=\"12\" cols=\"80\"></textarea></label></p>\n\
         <p><label>Extractive: sentences\n\
         <input type=\"range\" name=\"sentences\" min=\"1\" max=\"10\" value=\"3\"></label></p>\n\
         <p><button type=\"submit\">Summarize</button></p>\n\
         </form>\n</body>\n</html>\n"
    )
}

pub fn render_warning(message: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<body>\n<h1>Text Summarizer</h1>\n\
         <p class=\"warning\">{}</p>\n<p><a href=\"/\">Back</a></p>\n</body>\n</html>\n",
        escape_html(message)
    )
}

pub fn render_results(mode: Mode, summaries: &[String]) -> String {
    let sections: String = summaries
        .iter()
        .enumerate()
        .map(|(i, summary)| {
            format!(
                "<h2>Summary {} ({})</h2>\n<p>{}</p>\n",
                i + 1,
                mode,
                escape_html(summary)
            )
        })
        .collect();

    format!(
        "<!doctype html>\n<html>\n<body>\n<h1>Text Summarizer</h1>\n{}\
         <p><a href=\"/\">Back</a></p>\n</body>\n</html>\n",
        sections
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"a\" & b</b>"),
            "&lt;b&gt;&quot;a&quot; &amp; b&lt;/b&gt;"
        );
    }

    #[test]
    fn test_index_lists_models() {
        let choices = vec!["gemma3:12b".to_string(), "dummy".to_string()];
        let page = render_index("dummy", &choices);
        assert!(page.contains("<option value=\"gemma3:12b\">gemma3:12b</option>"));
        assert!(page.contains("<option value=\"dummy\" selected>dummy</option>"));
        assert!(page.contains("name=\"sentences\""));
    }

    #[test]
    fn test_results_have_numbered_subheaders() {
        let summaries = vec!["first".to_string(), "second".to_string()];
        let page = render_results(Mode::Extractive, &summaries);
        assert!(page.contains("<h2>Summary 1 (extractive)</h2>"));
        assert!(page.contains("<h2>Summary 2 (extractive)</h2>"));
    }

    #[test]
    fn test_summary_text_is_escaped() {
        let summaries = vec!["<script>alert(1)</script>".to_string()];
        let page = render_results(Mode::Abstractive, &summaries);
        assert!(!page.contains("<script>"));
    }
}
