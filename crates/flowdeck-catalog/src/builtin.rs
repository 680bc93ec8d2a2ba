//! Built-in agent types
//!
//! The catalog shipped with Flowdeck: document-processing, AI, and business
//! automation agents across the four library categories.

use crate::agent_type::{AgentCategory, AgentType};
use crate::subtype::AgentSubtype;
use serde_json::json;

/// The full built-in agent list, in library display order
#[must_use]
pub fn agent_types() -> Vec<AgentType> {
    use AgentCategory::*;
    use AgentSubtype::*;

    vec![
        // Input & data ingestion
        AgentType::new(
            "document-intake",
            "Document Intake",
            DataSource,
            File,
            "Receive invoices, contracts, forms",
        )
        .with_icon("inbox")
        .with_color("blue")
        .with_defaults(json!({
            "acceptedTypes": [".pdf", ".jpg", ".png", ".docx"],
            "autoClassify": true,
            "maxSize": "25MB",
        })),
        AgentType::new(
            "email-monitor",
            "Email Monitor",
            DataSource,
            Email,
            "Watch inbox for new documents",
        )
        .with_icon("envelope-open")
        .with_color("green")
        .with_defaults(json!({
            "emailFilters": [],
            "attachmentTypes": [".pdf", ".xlsx"],
            "pollInterval": 300,
        })),
        AgentType::new(
            "erp-connector",
            "ERP Connector",
            DataSource,
            Api,
            "Connect to SAP, Oracle, NetSuite",
        )
        .with_icon("building")
        .with_color("purple")
        .with_defaults(json!({
            "system": "SAP",
            "endpoint": "",
            "credentials": {},
            "syncFrequency": "hourly",
        })),
        AgentType::new(
            "api-gateway",
            "API Gateway",
            DataSource,
            Api,
            "Connect to external APIs and services",
        )
        .with_icon("plug")
        .with_color("blue")
        .with_defaults(json!({
            "endpoint": "",
            "authentication": "api-key",
            "rateLimit": 1000,
            "timeout": 30,
        })),
        AgentType::new(
            "ftp-connector",
            "FTP Connector",
            DataSource,
            Ftp,
            "Monitor and retrieve files from FTP",
        )
        .with_icon("server")
        .with_color("gray")
        .with_defaults(json!({
            "host": "",
            "port": 21,
            "username": "",
            "secure": true,
            "watchFolder": "/incoming",
        })),
        AgentType::new(
            "web-scraper",
            "Web Scraper",
            DataSource,
            Scraper,
            "Extract data from websites",
        )
        .with_icon("spider")
        .with_color("green")
        .with_defaults(json!({
            "targetUrl": "",
            "selectors": {},
            "frequency": "hourly",
            "respectRobots": true,
        })),
        // Document processing & vision
        AgentType::new(
            "smart-ocr",
            "Smart OCR",
            Processor,
            Ocr,
            "Extract text with context awareness",
        )
        .with_icon("eye")
        .with_color("indigo")
        .with_defaults(json!({
            "language": "multi",
            "preserveLayout": true,
            "confidenceThreshold": 0.85,
            "preprocessing": "auto",
        })),
        AgentType::new(
            "document-classifier",
            "Document Classifier",
            Processor,
            Classification,
            "Auto-categorize document types",
        )
        .with_icon("tags")
        .with_color("yellow")
        .with_defaults(json!({
            "categories": ["invoice", "contract", "receipt", "form"],
            "confidenceThreshold": 0.9,
            "manualReview": true,
        })),
        AgentType::new(
            "data-extractor",
            "Data Extractor",
            Processor,
            Extraction,
            "Extract key-value pairs",
        )
        .with_icon("search-plus")
        .with_color("teal")
        .with_defaults(json!({
            "fields": ["amount", "date", "vendor", "invoice_number"],
            "useTemplates": true,
            "fuzzyMatching": true,
        })),
        AgentType::new(
            "pdf-processor",
            "PDF Processor",
            Processor,
            Pdf,
            "Advanced PDF parsing and extraction",
        )
        .with_icon("file-pdf")
        .with_color("red")
        .with_defaults(json!({
            "extractTables": true,
            "preserveFormatting": true,
            "extractImages": false,
            "pageRange": "all",
        })),
        AgentType::new(
            "image-analyzer",
            "Image Analyzer",
            Processor,
            Image,
            "Analyze and extract from images",
        )
        .with_icon("camera")
        .with_color("pink")
        .with_defaults(json!({
            "extractText": true,
            "detectObjects": false,
            "enhanceQuality": true,
            "supportedFormats": [".jpg", ".png", ".tiff"],
        })),
        AgentType::new(
            "data-transformer",
            "Data Transformer",
            Processor,
            Transformation,
            "Transform and normalize data",
        )
        .with_icon("exchange")
        .with_color("teal")
        .with_defaults(json!({
            "transformations": [],
            "outputFormat": "json",
            "validation": true,
            "errorHandling": "skip",
        })),
        AgentType::new(
            "quality-checker",
            "Quality Checker",
            Processor,
            Validation,
            "Validate data quality and completeness",
        )
        .with_icon("check-double")
        .with_color("emerald")
        .with_defaults(json!({
            "qualityRules": [],
            "thresholds": { "completeness": 0.95, "accuracy": 0.9 },
            "reportFormat": "detailed",
        })),
        // AI business logic
        AgentType::new(
            "business-validator",
            "Business Validator",
            Ai,
            Llm,
            "Validate against business rules",
        )
        .with_icon("check-circle")
        .with_color("emerald")
        .with_defaults(json!({
            "model": "gpt-4-turbo",
            "businessRules": [],
            "validationChecks": ["completeness", "accuracy", "compliance"],
            "temperature": 0.1,
        })),
        AgentType::new(
            "fraud-detector",
            "Fraud Detector",
            Ai,
            Mcp,
            "Detect anomalies and fraud",
        )
        .with_icon("shield")
        .with_color("red")
        .with_defaults(json!({
            "riskThreshold": 0.7,
            "mlModel": "fraud-detection-v2",
            "flagActions": ["hold", "review", "approve"],
        })),
        AgentType::new(
            "compliance-check",
            "Compliance Check",
            Ai,
            Rag,
            "Verify regulatory compliance",
        )
        .with_icon("balance-scale")
        .with_color("blue")
        .with_defaults(json!({
            "regulations": ["SOX", "GDPR", "PCI-DSS"],
            "vectorDb": "compliance-rules",
            "confidence": 0.8,
        })),
        AgentType::new(
            "smart-router",
            "Smart Router",
            Ai,
            Llm,
            "Route to appropriate workflow",
        )
        .with_icon("route")
        .with_color("cyan")
        .with_defaults(json!({
            "routingRules": [],
            "destinations": [],
            "fallbackAction": "manual_review",
        })),
        AgentType::new(
            "sentiment-analyzer",
            "Sentiment Analyzer",
            Ai,
            Nlp,
            "Analyze sentiment and emotion",
        )
        .with_icon("smile")
        .with_color("yellow")
        .with_defaults(json!({
            "model": "sentiment-v1",
            "granularity": "sentence",
            "emotions": ["positive", "negative", "neutral"],
            "confidence": 0.8,
        })),
        AgentType::new(
            "content-generator",
            "Content Generator",
            Ai,
            Llm,
            "Generate content using AI",
        )
        .with_icon("pen")
        .with_color("purple")
        .with_defaults(json!({
            "model": "gpt-4",
            "maxTokens": 2000,
            "temperature": 0.7,
            "style": "professional",
        })),
        AgentType::new(
            "pattern-detector",
            "Pattern Detector",
            Ai,
            Ml,
            "Detect patterns and anomalies",
        )
        .with_icon("chart-line")
        .with_color("indigo")
        .with_defaults(json!({
            "algorithm": "isolation-forest",
            "sensitivity": 0.1,
            "windowSize": 100,
            "alertThreshold": 0.05,
        })),
        AgentType::new(
            "language-translator",
            "Language Translator",
            Ai,
            Nlp,
            "Multi-language translation",
        )
        .with_icon("language")
        .with_color("green")
        .with_defaults(json!({
            "sourceLanguage": "auto",
            "targetLanguages": ["en", "tr", "es", "fr"],
            "preserveFormatting": true,
            "quality": "high",
        })),
        AgentType::new(
            "risk-assessor",
            "Risk Assessor",
            Ai,
            Ml,
            "AI-powered risk assessment",
        )
        .with_icon("exclamation-triangle")
        .with_color("red")
        .with_defaults(json!({
            "riskFactors": [],
            "riskLevels": ["low", "medium", "high", "critical"],
            "scoringModel": "risk-v2",
            "thresholds": { "low": 0.3, "medium": 0.6, "high": 0.8 },
        })),
        // Business actions & outputs
        AgentType::new(
            "approval-workflow",
            "Approval Workflow",
            Output,
            Workflow,
            "Trigger approval processes",
        )
        .with_icon("user-check")
        .with_color("green")
        .with_defaults(json!({
            "approvers": [],
            "thresholds": {},
            "escalationRules": [],
        })),
        AgentType::new(
            "erp-updater",
            "ERP Updater",
            Output,
            Api,
            "Update business systems",
        )
        .with_icon("sync")
        .with_color("purple")
        .with_defaults(json!({
            "targetSystem": "",
            "mappingRules": {},
            "errorHandling": "retry",
        })),
        AgentType::new(
            "notification-center",
            "Notification Center",
            Output,
            Notification,
            "Alert stakeholders",
        )
        .with_icon("bell")
        .with_color("orange")
        .with_defaults(json!({
            "channels": ["email", "slack", "sms"],
            "templates": {},
            "scheduling": "immediate",
        })),
        AgentType::new(
            "analytics-reporter",
            "Analytics Reporter",
            Output,
            Report,
            "Generate business insights",
        )
        .with_icon("chart-bar")
        .with_color("indigo")
        .with_defaults(json!({
            "reportType": "dashboard",
            "metrics": [],
            "frequency": "daily",
            "recipients": [],
        })),
        AgentType::new(
            "webhook-sender",
            "Webhook Sender",
            Output,
            Webhook,
            "Send data via webhooks",
        )
        .with_icon("arrow-right")
        .with_color("blue")
        .with_defaults(json!({
            "webhookUrl": "",
            "method": "POST",
            "headers": {},
            "retryAttempts": 3,
            "timeout": 30,
        })),
        AgentType::new(
            "archive-system",
            "Archive System",
            Output,
            Storage,
            "Archive processed documents",
        )
        .with_icon("archive")
        .with_color("gray")
        .with_defaults(json!({
            "storageType": "s3",
            "retentionPolicy": "7-years",
            "encryption": true,
            "compression": "gzip",
        })),
        AgentType::new(
            "audit-logger",
            "Audit Logger",
            Output,
            Logging,
            "Log activities for compliance",
        )
        .with_icon("clipboard-list")
        .with_color("indigo")
        .with_defaults(json!({
            "logLevel": "info",
            "includePayload": false,
            "retention": "5-years",
            "format": "json",
        })),
        AgentType::new(
            "email-sender",
            "Email Sender",
            Output,
            Email,
            "Send automated emails",
        )
        .with_icon("paper-plane")
        .with_color("green")
        .with_defaults(json!({
            "smtpSettings": {},
            "templates": {},
            "attachments": true,
            "tracking": false,
        })),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let agents = agent_types();
        let mut slugs: Vec<_> = agents.iter().map(|a| a.id.as_str()).collect();
        slugs.sort_unstable();
        let before = slugs.len();
        slugs.dedup();
        assert_eq!(before, slugs.len());
    }

    #[test]
    fn every_agent_has_icon_and_color() {
        for agent in agent_types() {
            assert!(!agent.icon.is_empty(), "{} missing icon", agent.id);
            assert!(!agent.color.is_empty(), "{} missing color", agent.id);
        }
    }

    #[test]
    fn defaults_carry_original_shapes() {
        let agents = agent_types();
        let ocr = agents.iter().find(|a| a.id.as_str() == "smart-ocr").unwrap();
        assert_eq!(ocr.default_configuration["confidenceThreshold"], 0.85);
        let validator = agents
            .iter()
            .find(|a| a.id.as_str() == "business-validator")
            .unwrap();
        assert_eq!(validator.default_configuration["model"], "gpt-4-turbo");
    }
}
