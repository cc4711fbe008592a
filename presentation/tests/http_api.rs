//! End-to-end tests against a live server on an ephemeral port

use predictor_application::{
    Preprocessor, PreprocessorError, PredictionContext, Regressor, RegressorError, TableCodec,
    TableCodecError,
};
use predictor_domain::{CategoricalDomains, Cell, FeatureMatrix, FeatureSchema, Table};
use predictor_presentation::{AppState, WebSettings, serve};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Numeric columns pass through, categorical columns become their text length
struct LengthEncoder {
    schema: FeatureSchema,
}

impl Preprocessor for LengthEncoder {
    fn transform(&self, table: &Table) -> Result<FeatureMatrix, PreprocessorError> {
        let mut rows = vec![Vec::new(); table.n_rows()];
        for name in self.schema.columns() {
            let column = table
                .column(name)
                .map_err(|_| PreprocessorError::MissingColumn(name.to_string()))?;
            for (row, cell) in rows.iter_mut().zip(column) {
                let value = match cell {
                    Cell::Number(n) => *n,
                    Cell::Missing => 0.0,
                    Cell::Text(s) if self.schema.is_numeric(name) => {
                        return Err(PreprocessorError::NonNumeric {
                            column: name.to_string(),
                            value: s.clone(),
                        });
                    }
                    Cell::Text(s) => s.len() as f64,
                };
                row.push(value);
            }
        }
        Ok(FeatureMatrix::from_rows(self.schema.len(), rows)?)
    }
}

struct SumRegressor;

impl Regressor for SumRegressor {
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<f64>, RegressorError> {
        Ok(features.rows().map(|row| row.iter().sum::<f64>() + 0.25).collect())
    }
}

/// Unquoted comma-separated codec
struct CommaCodec;

impl TableCodec for CommaCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Table, TableCodecError> {
        let text =
            std::str::from_utf8(bytes).map_err(|e| TableCodecError::Malformed(e.to_string()))?;
        let mut lines = text.lines().filter(|l| !l.is_empty());
        let header = lines.next().ok_or(TableCodecError::Empty)?;
        let rows = lines
            .map(|l| l.split(',').map(str::to_string).collect())
            .collect();
        Ok(Table::from_text_rows(header.split(','), rows)?)
    }

    fn encode(&self, table: &Table) -> Result<Vec<u8>, TableCodecError> {
        let mut out = table.columns().join(",");
        out.push('\n');
        for row in table.rows() {
            let fields: Vec<String> = row.iter().map(Cell::to_string).collect();
            out.push_str(&fields.join(","));
            out.push('\n');
        }
        Ok(out.into_bytes())
    }

    fn content_type(&self) -> &'static str {
        "text/csv"
    }
}

struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
}

impl TestServer {
    async fn start() -> Self {
        let schema = FeatureSchema::new(
            vec!["area_sqft".to_string(), "age_years".to_string()],
            vec!["city".to_string()],
        )
        .unwrap();
        let domains = CategoricalDomains::new().with_feature("city", ["Pune", "Delhi", "Mumbai"]);
        let context = Arc::new(PredictionContext::new(
            schema.clone(),
            domains,
            Arc::new(LengthEncoder { schema }),
            Arc::new(SumRegressor),
        ));
        let state = AppState::new(context, Arc::new(CommaCodec), WebSettings::default());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = CancellationToken::new();
        tokio::spawn(serve(listener, state, shutdown.clone()));

        Self { addr, shutdown }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn csv_upload(content: &str) -> Form {
    Form::new().part(
        "file",
        Part::bytes(content.as_bytes().to_vec())
            .file_name("houses.csv")
            .mime_str("text/csv")
            .unwrap(),
    )
}

#[tokio::test]
async fn test_index_lists_features_and_options() {
    let server = TestServer::start().await;
    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("name=\"area_sqft\""));
    assert!(body.contains("name=\"age_years\""));
    assert!(body.contains("<option value=\"Delhi\">Delhi</option>"));
    assert!(body.contains("<option value=\"Pune\">Pune</option>"));
    assert!(!body.contains("id=\"prediction\""));
}

#[tokio::test]
async fn test_predict_renders_rounded_value() {
    let server = TestServer::start().await;
    let response = reqwest::Client::new()
        .post(server.url("/predict"))
        .form(&[("area_sqft", "1000"), ("age_years", "5"), ("city", "Pune")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("<strong id=\"prediction\">1009.25</strong>"));
}

#[tokio::test]
async fn test_predict_with_non_numeric_value_is_500() {
    let server = TestServer::start().await;
    let response = reqwest::Client::new()
        .post(server.url("/predict"))
        .form(&[("area_sqft", "large"), ("age_years", "5"), ("city", "Pune")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_predict_with_missing_field_is_500() {
    let server = TestServer::start().await;
    let response = reqwest::Client::new()
        .post(server.url("/predict"))
        .form(&[("area_sqft", "1000"), ("city", "Pune")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_batch_predict_appends_column() {
    let server = TestServer::start().await;
    let upload = "area_sqft,age_years,city\n1000,5,Pune\n1200,10,Delhi\n800,2,Mumbai\n";
    let response = reqwest::Client::new()
        .post(server.url("/batch_predict"))
        .multipart(csv_upload(upload))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers["content-type"], "text/csv");
    assert_eq!(
        headers["content-disposition"],
        "attachment; filename=\"batch_predictions.csv\""
    );

    let body = response.text().await.unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(
        lines,
        vec![
            "area_sqft,age_years,city,Predicted_Price_INR",
            "1000,5,Pune,1009.25",
            "1200,10,Delhi,1215.25",
            "800,2,Mumbai,808.25",
        ]
    );
}

#[tokio::test]
async fn test_batch_predict_missing_column_is_500() {
    let server = TestServer::start().await;
    let response = reqwest::Client::new()
        .post(server.url("/batch_predict"))
        .multipart(csv_upload("area_sqft,age_years\n1000,5\n"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_batch_predict_without_file_is_400() {
    let server = TestServer::start().await;
    let form = Form::new().text("comment", "no upload here");
    let response = reqwest::Client::new()
        .post(server.url("/batch_predict"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
