pub mod decision_notice;
