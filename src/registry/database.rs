use serde::Serialize;

/// Supported database add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Postgres,
    Mysql,
    Mongodb,
    Sqlite,
    Cockroachdb,
    Mariadb,
}

/// Container and connection fragments for one database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DbConfig {
    /// docker-compose service name
    pub service_name: &'static str,
    /// Container image reference
    pub image: &'static str,
    /// docker-compose environment block (pre-indented YAML lines)
    pub environment: &'static str,
    /// Port the database listens on
    pub port: &'static str,
    /// Volume mount line
    pub volume: &'static str,
    /// Named volume
    pub volume_name: &'static str,
    /// Human-readable database name
    pub db_name: &'static str,
    /// Prefix for the generated .env variables
    pub db_env_prefix: &'static str,
    /// Go driver import line
    pub import: &'static str,
    /// database/sql driver name
    pub driver: &'static str,
    /// DSN format string consumed by the generated connection code
    pub dsn: &'static str,
}

impl DatabaseKind {
    /// Parse a database identifier. Unknown identifiers yield `None` and the
    /// database add-on is simply not applied.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "postgres" => Some(Self::Postgres),
            "mysql" => Some(Self::Mysql),
            "mongodb" => Some(Self::Mongodb),
            "sqlite" => Some(Self::Sqlite),
            "cockroachdb" => Some(Self::Cockroachdb),
            "mariadb" => Some(Self::Mariadb),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Mongodb => "mongodb",
            Self::Sqlite => "sqlite",
            Self::Cockroachdb => "cockroachdb",
            Self::Mariadb => "mariadb",
        }
    }

    /// Template root holding this database's compose template.
    pub fn template_root(&self) -> String {
        format!("db/{}", self.as_str())
    }

    pub fn fragments(&self) -> DbConfig {
        match self {
            Self::Postgres => DbConfig {
                service_name: "postgres_gf",
                image: "postgres:latest",
                environment: "      POSTGRES_DB: ${GOFORGE_DB_DATABASE}\n      POSTGRES_USER: ${GOFORGE_DB_USERNAME}\n      POSTGRES_PASSWORD: ${GOFORGE_DB_PASSWORD}",
                port: "5432",
                volume: "postgres_volume_gf:/var/lib/postgresql/data",
                volume_name: "postgres_volume_gf",
                db_name: "PostgreSQL",
                db_env_prefix: "GOFORGE",
                import: r#"_ "github.com/jackc/pgx/v5/stdlib""#,
                driver: "pgx",
                dsn: "postgres://%s:%s@%s:%s/%s?sslmode=disable",
            },
            Self::Mysql => DbConfig {
                service_name: "mysql_gf",
                image: "mysql:8",
                environment: "      MYSQL_DATABASE: ${GOFORGE_DB_DATABASE}\n      MYSQL_USER: ${GOFORGE_DB_USERNAME}\n      MYSQL_PASSWORD: ${GOFORGE_DB_PASSWORD}\n      MYSQL_ROOT_PASSWORD: ${GOFORGE_DB_PASSWORD}",
                port: "3306",
                volume: "mysql_volume_gf:/var/lib/mysql",
                volume_name: "mysql_volume_gf",
                db_name: "MySQL",
                db_env_prefix: "GOFORGE",
                import: r#"_ "github.com/go-sql-driver/mysql""#,
                driver: "mysql",
                dsn: "%s:%s@tcp(%s:%s)/%s",
            },
            Self::Mongodb => DbConfig {
                service_name: "mongo_gf",
                image: "mongo:latest",
                environment: "      MONGO_INITDB_DATABASE: ${GOFORGE_DB_DATABASE}\n      MONGO_INITDB_ROOT_USERNAME: ${GOFORGE_DB_USERNAME}\n      MONGO_INITDB_ROOT_PASSWORD: ${GOFORGE_DB_PASSWORD}",
                port: "27017",
                volume: "mongo_volume_gf:/data/db",
                volume_name: "mongo_volume_gf",
                db_name: "MongoDB",
                db_env_prefix: "GOFORGE",
                ..DbConfig::default()
            },
            Self::Sqlite => DbConfig {
                service_name: "sqlite_gf",
                image: "alpine:latest",
                environment: "      # SQLite has no environment variables",
                port: "0",
                volume: "sqlite_volume_gf:/data",
                volume_name: "sqlite_volume_gf",
                db_name: "SQLite",
                db_env_prefix: "GOFORGE",
                import: r#"_ "modernc.org/sqlite""#,
                driver: "sqlite",
                dsn: "file:%s.db?_pragma=journal_mode(WAL)",
            },
            Self::Cockroachdb => DbConfig {
                service_name: "cockroach_gf",
                image: "cockroachdb/cockroach:latest",
                environment: "      # CockroachDB needs no env vars in insecure mode",
                port: "26257",
                volume: "cockroach_volume_gf:/cockroach/cockroach-data",
                volume_name: "cockroach_volume_gf",
                db_name: "CockroachDB",
                db_env_prefix: "GOFORGE",
                import: r#"_ "github.com/jackc/pgx/v5/stdlib""#,
                driver: "pgx",
                dsn: "postgres://%s:%s@%s:%s/%s?sslmode=disable",
            },
            Self::Mariadb => DbConfig {
                service_name: "mariadb_gf",
                image: "mariadb:latest",
                environment: "      MARIADB_DATABASE: ${GOFORGE_DB_DATABASE}\n      MARIADB_USER: ${GOFORGE_DB_USERNAME}\n      MARIADB_PASSWORD: ${GOFORGE_DB_PASSWORD}\n      MARIADB_ROOT_PASSWORD: ${GOFORGE_DB_PASSWORD}",
                port: "3306",
                volume: "mariadb_volume_gf:/var/lib/mysql",
                volume_name: "mariadb_volume_gf",
                db_name: "MariaDB",
                db_env_prefix: "GOFORGE",
                import: r#"_ "github.com/go-sql-driver/mysql""#,
                driver: "mysql",
                dsn: "%s:%s@tcp(%s:%s)/%s",
            },
        }
    }
}

impl DbConfig {
    /// Registry lookup by identifier. Unknown identifiers yield the empty
    /// config, not an error.
    pub fn for_id(id: &str) -> Self {
        DatabaseKind::parse(id).map(|k| k.fragments()).unwrap_or_default()
    }
}
