pub mod originality_report;
