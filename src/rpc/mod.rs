// src/rpc/mod.rs
//
// The two ends of the portal's GWT-RPC exchange we care about:
// building the getCourseMembers call, and pulling records out of the reply.

pub mod decode;
pub mod request;

pub use decode::decode_course_grades;
pub use request::course_members_body;
