//! Closed role and access-level sets shared across the campus domain.

use crate::enumeration;

enumeration! {
    /// Kind of account a user holds.
    ///
    /// Backing values are stable storage codes.
    pub struct UserType: i32 {
        /// Teaching staff.
        PROFESSOR = (1, "professor"),
        /// Enrolled learner.
        STUDENT = (2, "student"),
    }
}

enumeration! {
    /// Access level granted to a user.
    pub struct UserLevel: i32 {
        /// Read-only access to one's own records.
        STUDENT = (1, "student"),
        /// May grade and manage lectures.
        PROFESSOR = (2, "professor"),
        /// Unrestricted access.
        ADMINISTRATOR = (3, "administrator"),
    }
}
