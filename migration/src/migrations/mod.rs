pub mod m202608060001_create_users;
pub mod m202608060002_create_courses;
pub mod m202608060003_create_user_course_roles;
pub mod m202608060004_create_course_features;
pub mod m202608060005_create_assignments;
pub mod m202608060006_create_submissions;
pub mod m202608060007_create_submission_attachments;
pub mod m202608060008_create_originality_reports;
