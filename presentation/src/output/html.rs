//! HTML page for the prediction form

use predictor_domain::{CategoricalDomains, FeatureSchema, Prediction};

/// The single page served at `/`
///
/// Lists one number input per numeric feature, one `<select>` per
/// categorical feature (options from the categorical domains), the last
/// prediction when there is one, and a CSV upload form.
pub struct IndexPage<'a> {
    schema: &'a FeatureSchema,
    domains: &'a CategoricalDomains,
    prediction: Option<Prediction>,
}

impl<'a> IndexPage<'a> {
    pub fn new(schema: &'a FeatureSchema, domains: &'a CategoricalDomains) -> Self {
        Self {
            schema,
            domains,
            prediction: None,
        }
    }

    pub fn with_prediction(mut self, prediction: Prediction) -> Self {
        self.prediction = Some(prediction);
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<title>Price Predictor</title>\n");
        html.push_str(STYLE);
        html.push_str("</head>\n<body>\n<main>\n");
        html.push_str("<h1>Price Predictor</h1>\n");

        html.push_str("<section>\n<h2>Single prediction</h2>\n");
        html.push_str("<form method=\"post\" action=\"/predict\">\n");
        for name in self.schema.numeric() {
            html.push_str(&Self::numeric_input(name));
        }
        for name in self.schema.categorical() {
            html.push_str(&Self::select(name, self.domains.values(name)));
        }
        html.push_str("<button type=\"submit\">Predict</button>\n</form>\n");

        if let Some(prediction) = &self.prediction {
            html.push_str(&format!(
                "<p class=\"prediction\">Predicted price: <strong id=\"prediction\">{}</strong> INR</p>\n",
                prediction
            ));
        }
        html.push_str("</section>\n");

        html.push_str("<section>\n<h2>Batch prediction</h2>\n");
        html.push_str(
            "<form method=\"post\" action=\"/batch_predict\" enctype=\"multipart/form-data\">\n",
        );
        html.push_str("<input type=\"file\" name=\"file\" accept=\".csv,text/csv\" required>\n");
        html.push_str("<button type=\"submit\">Upload CSV</button>\n</form>\n");
        html.push_str("</section>\n");

        html.push_str("</main>\n</body>\n</html>\n");
        html
    }

    fn numeric_input(name: &str) -> String {
        let name = escape(name);
        format!(
            "<label>{name}<input type=\"number\" step=\"any\" name=\"{name}\" required></label>\n"
        )
    }

    fn select(name: &str, options: &[String]) -> String {
        let name = escape(name);
        let mut html = format!("<label>{name}<select name=\"{name}\" required>\n");
        for option in options {
            let option = escape(option);
            html.push_str(&format!("<option value=\"{option}\">{option}</option>\n"));
        }
        html.push_str("</select></label>\n");
        html
    }
}

const STYLE: &str = "<style>\n\
body { font-family: sans-serif; margin: 2rem; }\n\
main { max-width: 40rem; }\n\
label { display: block; margin: 0.5rem 0; }\n\
input, select { display: block; margin-top: 0.25rem; }\n\
.prediction { font-size: 1.25rem; }\n\
</style>\n";

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
