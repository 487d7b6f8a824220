use std::fmt;

use serde::Serialize;

/// JSON body of a "create issue comment" request.
#[derive(Debug, Serialize)]
pub struct CommentPayload<'a> {
    pub body: &'a str,
}

/// What the server answered when the comment was posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub version: String,
    pub status: u16,
    pub reason: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl PublishReceipt {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Raw response dump: status line, headers, blank line, body.
impl fmt::Display for PublishReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.version, self.status)?;
        if let Some(reason) = &self.reason {
            write!(f, " {reason}")?;
        }
        f.write_str("\r\n")?;
        for (name, value) in &self.headers {
            write!(f, "{name}: {value}\r\n")?;
        }
        write!(f, "\r\n{}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_has_a_single_body_key() {
        let text = "👉 Plan: 1 to add.\n\n**🛠️ Created**:\n\"quoted\"\n";
        let json = serde_json::to_value(CommentPayload { body: text }).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["body"], text);
    }

    #[test]
    fn dumps_response_like_the_wire_format() {
        let receipt = PublishReceipt {
            version: "HTTP/1.1".to_string(),
            status: 201,
            reason: Some("Created".to_string()),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: "{\"id\":1}".to_string(),
        };

        assert!(receipt.is_success());
        assert_eq!(
            receipt.to_string(),
            "HTTP/1.1 201 Created\r\ncontent-type: application/json\r\n\r\n{\"id\":1}"
        );
    }

    #[test]
    fn non_2xx_is_not_success() {
        let receipt = PublishReceipt {
            version: "HTTP/1.1".to_string(),
            status: 403,
            reason: None,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(!receipt.is_success());
    }
}
