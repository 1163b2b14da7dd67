//! Diagram renderer seam.
//!
//! The graph builder produces a Mermaid description; rendering it is the job
//! of an external collaborator behind [`DiagramRenderer`]. Render failures
//! are expected to degrade gracefully: the caller logs a diagnostic line and
//! shows no diagram.

use thiserror::Error;

/// Errors from a diagram renderer.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("diagram rendering failed: {0}")]
    Failed(String),
}

/// Renders a declarative graph description into display markup.
pub trait DiagramRenderer {
    fn render(&self, definition: &str) -> Result<String, RenderError>;
}

/// Renderer producing a standalone HTML page with an embedded Mermaid
/// diagram. The page renders client-side and falls back to showing the raw
/// description when Mermaid rejects it.
pub struct HtmlRenderer;

impl DiagramRenderer for HtmlRenderer {
    fn render(&self, definition: &str) -> Result<String, RenderError> {
        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Cast Relationships</title>
    <script src="https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.min.js"></script>
    <style>
        body {{
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f5f5f5;
        }}
        .container {{
            max-width: 1200px;
            margin: 0 auto;
            background-color: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .diagram {{
            text-align: center;
            margin: 20px 0;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="diagram" id="mermaid-diagram"></div>
    </div>
    <script>
        mermaid.initialize({{ startOnLoad: false }});
        const graph = `{}`;
        mermaid.render('mermaid-svg', graph).then(result => {{
            document.getElementById('mermaid-diagram').innerHTML = result.svg;
        }}).catch(error => {{
            console.error('Mermaid rendering error:', error);
            document.getElementById('mermaid-diagram').innerHTML =
                '<pre style="text-align: left; background: #f5f5f5; padding: 10px; border-radius: 4px;">' +
                graph +
                '</pre>';
        }});
    </script>
</body>
</html>"#,
            definition.replace('`', "\\`").replace('$', "\\$")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_renderer_embeds_definition() {
        let markup = HtmlRenderer.render("graph TD\n    A[\"a\"]").unwrap();
        assert!(markup.contains("graph TD"));
        assert!(markup.contains("mermaid.min.js"));
    }

    #[test]
    fn test_html_renderer_escapes_template_characters() {
        let markup = HtmlRenderer.render("graph TD\n    A[\"`$x`\"]").unwrap();
        assert!(markup.contains("\\`\\$x\\`"));
    }
}
