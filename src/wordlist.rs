/// Candidate admin paths, probed in this order. Duplicates are probed twice.
pub const ADMIN_PATHS: &[&str] = &[
    // Common admin paths
    "admin", "administrator", "wp-admin", "wp-login.php", "login", "panel",
    "controlpanel", "cp", "dashboard", "manager", "admincp", "adminpanel",
    "sysadmin", "system", "webadmin", "backend", "secure", "private",

    // Framework specific
    "admin/login", "admin_area", "admin-console", "admin-login", "admin1",
    "admin2", "administrator/login", "siteadmin", "memberadmin", "useradmin",
    "admin/account", "admin/home", "admin/controlpanel", "admin/cp",

    // CMS specific
    "wp-admin/", "wp-login.php", "administrator/", "admin.php", "login.php",
    "admin/admin.php", "admin_area/admin.php", "admin_area/login.php",
    "admin_area/index.php", "bb-admin/", "admin/login.aspx", "admin.aspx",

    // Database / app servers
    "phpmyadmin", "pma", "mysql", "sql", "database", "db", "phpMyAdmin",
    "adminer", "adminer.php", "manager/html", "tomcat/manager", "jmx-console",
    "web-console", "admin-console", "management", "monitoring",

    // Directory variations
    "admin/", "admin/index.php", "admin/index.html", "admin/login/",
    "administrator/", "administrator/index.php", "cpanel", "cPanel",
    "plesk", "directadmin", "webmin", "usermin",

    // Security appliances
    "auth", "authentication", "signin", "sign-in", "access", "console",
    "terminal", "shell", "cmd", "exec", "api", "api/v1", "rest",

    // Custom paths
    "backoffice", "bo", "office", "corporate", "intranet", "internal",
    "staff", "employee", "member", "user", "account", "profile",
    "settings", "config", "configuration", "setup", "install",
];

/// Keywords whose presence in a lowercased body hints at an admin page.
pub const ADMIN_INDICATORS: &[&str] = &[
    "login", "password", "username", "admin", "administrator", "dashboard",
    "control panel", "management", "authentication", "signin", "log in",
    "user name", "pass word", "submit", "enter", "access denied", "unauthorized",
];

pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
];

/// Owned copy of the built-in path list, for callers that need a `Vec`.
pub fn admin_paths() -> Vec<String> {
    ADMIN_PATHS.iter().map(|p| p.to_string()).collect()
}
