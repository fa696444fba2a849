/// The candidates checked on every run, in report order.
pub const CANDIDATES: &[&str] = &[
    "test123@example.com",
    "user@email.net",
    "john.doe@gmail.com",
    "info@company.org",
    "webmaster@website.co",
    "support@helpdesk.info",
    "user1234@my-domain.tv",
];
