use std::fs;
use std::path::Path;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use crate::config::constants::{ALERT_ITEM_TAG, RISK_CODE_TAG};
use crate::errors::{ZapResult, ZapSeverityError};
use crate::structs::report::{AlertItem, Report};

pub struct ReportParser;

impl ReportParser {
    pub fn parse_file(path: &Path) -> ZapResult<Report> {
        let content = fs::read(path).map_err(|source| ZapSeverityError::ReportRead {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("📄 Read {} bytes from {}", content.len(), path.display());
        Self::parse(&content)
    }

    /// Parses the whole document and collects every `<alertitem>` below the root
    /// element, at any depth. A root `<alertitem>` is not itself an alert.
    /// The document must be well-formed, a single root element with all tags closed.
    pub fn parse(xml: &[u8]) -> ZapResult<Report> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().check_end_names = true;

        let mut buf = Vec::new();
        let mut state = ParseState::default();

        loop {
            let event = reader.read_event_into(&mut buf).map_err(|err| {
                ZapSeverityError::malformed(format!("{} at byte {}", err, reader.buffer_position()))
            })?;

            match event {
                Event::Start(element) => state.open(&element, false)?,
                Event::Empty(element) => state.open(&element, true)?,
                Event::End(element) => state.close(element.name().as_ref())?,
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|err| ZapSeverityError::malformed(err.to_string()))?;
                    state.text(&text)?;
                }
                Event::CData(data) => state.text(&String::from_utf8_lossy(&data))?,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        state.finish()
    }
}

#[derive(Default)]
struct ParseState {
    open_elements: Vec<Vec<u8>>,
    seen_root: bool,
    alerts: Vec<AlertItem>,
    // (depth, index into alerts) of every alert item still open
    open_alerts: Vec<(usize, usize)>,
    risk_code: Option<RiskCodeCapture>,
}

struct RiskCodeCapture {
    depth: usize,
    alert: usize,
    text: String,
    // set once the riskcode element has a child; text after it is not the value
    sealed: bool,
}

impl ParseState {
    fn open(&mut self, element: &BytesStart<'_>, self_closing: bool) -> ZapResult<()> {
        let name = element.name();
        let name = name.as_ref();
        let depth = self.open_elements.len();

        if depth == 0 {
            if self.seen_root {
                return Err(ZapSeverityError::malformed(format!(
                    "junk after document element: <{}>",
                    String::from_utf8_lossy(name)
                )));
            }
            self.seen_root = true;
        }

        for attribute in element.attributes() {
            attribute.map_err(|err| ZapSeverityError::malformed(err.to_string()))?;
        }

        if let Some(capture) = self.risk_code.as_mut() {
            if depth == capture.depth + 1 {
                capture.sealed = true;
            }
        }

        if name == ALERT_ITEM_TAG && depth > 0 {
            self.alerts.push(AlertItem::default());
            if !self_closing {
                self.open_alerts.push((depth, self.alerts.len() - 1));
            }
        } else if name == RISK_CODE_TAG && self.risk_code.is_none() {
            let owner = self
                .open_alerts
                .last()
                .filter(|(alert_depth, index)| {
                    alert_depth + 1 == depth && self.alerts[*index].risk_code.is_none()
                })
                .map(|(_, index)| *index);

            if let Some(alert) = owner {
                if self_closing {
                    self.alerts[alert].risk_code = Some(String::new());
                } else {
                    self.risk_code = Some(RiskCodeCapture {
                        depth,
                        alert,
                        text: String::new(),
                        sealed: false,
                    });
                }
            }
        }

        if !self_closing {
            self.open_elements.push(name.to_vec());
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) -> ZapResult<()> {
        if self.open_elements.pop().is_none() {
            return Err(ZapSeverityError::malformed(format!(
                "unexpected closing tag </{}>",
                String::from_utf8_lossy(name)
            )));
        }
        let depth = self.open_elements.len();

        if self.risk_code.as_ref().is_some_and(|capture| capture.depth == depth) {
            if let Some(capture) = self.risk_code.take() {
                self.alerts[capture.alert].risk_code = Some(capture.text);
            }
        }

        if self.open_alerts.last().is_some_and(|(alert_depth, _)| *alert_depth == depth) {
            self.open_alerts.pop();
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> ZapResult<()> {
        let depth = self.open_elements.len();

        if depth == 0 {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(ZapSeverityError::malformed(
                "text outside of the document element",
            ));
        }

        if let Some(capture) = self.risk_code.as_mut() {
            if capture.depth + 1 == depth && !capture.sealed {
                capture.text.push_str(text);
            }
        }
        Ok(())
    }

    fn finish(self) -> ZapResult<Report> {
        if let Some(name) = self.open_elements.last() {
            return Err(ZapSeverityError::malformed(format!(
                "unclosed element <{}> at end of document",
                String::from_utf8_lossy(name)
            )));
        }
        if !self.seen_root {
            return Err(ZapSeverityError::malformed("no element found"));
        }

        Ok(Report { alerts: self.alerts })
    }
}
