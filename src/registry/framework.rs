use serde::Serialize;

/// Supported Go web frameworks.
///
/// Each variant knows its template root (`rest/<id>`), its string fragments
/// and how to compose a route-group registration snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterKind {
    Gin,
    Chi,
    Echo,
    Fiber,
    Mux,
}

/// Go code fragments for one framework.
///
/// Plain data only. Defaults to all-empty, which renders as "feature not
/// applied" in the templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameworkConfig {
    /// Framework import line for main.go
    pub imports: &'static str,
    /// Name of the request context variable in handlers
    pub context_name: &'static str,
    /// Type of the handler context parameter(s)
    pub context_type: &'static str,
    /// Expression that decodes a JSON request body
    pub bind: &'static str,
    /// Expression that encodes a JSON response
    pub json: &'static str,
    /// Router value type
    pub router: &'static str,
    /// Expression that constructs the router
    pub start: &'static str,
    /// Additional imports handlers need
    pub other_imports: &'static str,
    /// HTTP verb token used when registering the list route
    pub get: &'static str,
    /// Full handler parameter list
    pub full_context: &'static str,
    /// Prefix expression that writes a value to the client
    pub to_the_client: &'static str,
    /// Response argument prefix for error paths
    pub response: &'static str,
    /// Import block for the generated router file
    pub import_router: &'static str,
    /// Import block for the generated handler file
    pub import_handler: &'static str,
}

impl RouterKind {
    /// Parse a router identifier. Unknown identifiers yield `None`, not an
    /// error: scaffolding then simply skips the router-specific templates.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "gin" => Some(Self::Gin),
            "chi" => Some(Self::Chi),
            "echo" => Some(Self::Echo),
            "fiber" => Some(Self::Fiber),
            "mux" => Some(Self::Mux),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gin => "gin",
            Self::Chi => "chi",
            Self::Echo => "echo",
            Self::Fiber => "fiber",
            Self::Mux => "mux",
        }
    }

    /// Template root holding this framework's source templates.
    pub fn template_root(&self) -> String {
        format!("rest/{}", self.as_str())
    }

    /// Code fragments for this framework.
    pub fn fragments(&self) -> FrameworkConfig {
        match self {
            Self::Gin => FrameworkConfig {
                imports: r#""github.com/gin-gonic/gin""#,
                context_name: "c",
                context_type: "*gin.Context",
                bind: "c.BindJSON",
                json: "c.JSON",
                router: "*gin.Engine",
                start: "gin.Default()",
                other_imports: r#""net/http""#,
                get: "GET",
                full_context: "c *gin.Context",
                to_the_client: "c.JSON(http.StatusOK, ",
                response: "(http.StatusOK,",
                import_router: "\t\"net/http\"\n\n\t\"github.com/gin-gonic/gin\"",
                import_handler: "\t\"net/http\"\n\n\t\"github.com/gin-gonic/gin\"",
            },
            Self::Chi => FrameworkConfig {
                imports: r#""github.com/go-chi/chi/v5""#,
                context_name: "r",
                context_type: "http.ResponseWriter, *http.Request",
                bind: "json.NewDecoder(r.Body).Decode",
                json: "render.JSON",
                router: "chi.Router",
                start: "chi.NewRouter()",
                other_imports: "\t\"encoding/json\"\n\t\"net/http\"\n\n\t\"github.com/go-chi/render\"",
                get: "Get",
                full_context: "w http.ResponseWriter, r *http.Request",
                to_the_client: "json.NewEncoder(w).Encode(",
                response: "(w, r,",
                import_router: "\t\"net/http\"\n\n\t\"github.com/go-chi/chi/v5\"",
                import_handler: "\t\"encoding/json\"\n\t\"net/http\"",
            },
            Self::Echo => FrameworkConfig {
                imports: r#""github.com/labstack/echo/v4""#,
                context_name: "c",
                context_type: "echo.Context",
                bind: "c.Bind",
                json: "c.JSON",
                router: "*echo.Echo",
                start: "echo.New()",
                other_imports: r#""net/http""#,
                full_context: "c echo.Context",
                import_handler: "\t\"net/http\"\n\n\t\"github.com/labstack/echo/v4\"",
                import_router: "\t\"github.com/labstack/echo/v4\"",
                ..FrameworkConfig::default()
            },
            Self::Fiber => FrameworkConfig {
                imports: r#""github.com/gofiber/fiber/v2""#,
                context_name: "c",
                context_type: "*fiber.Ctx",
                bind: "c.BodyParser",
                json: "c.JSON",
                router: "*fiber.App",
                start: "fiber.New()",
                full_context: "c *fiber.Ctx",
                import_handler: "\t\"github.com/gofiber/fiber/v2\"",
                import_router: "\t\"github.com/gofiber/fiber/v2\"",
                ..FrameworkConfig::default()
            },
            Self::Mux => FrameworkConfig {
                imports: r#""github.com/gorilla/mux""#,
                context_name: "w, r",
                context_type: "http.ResponseWriter, *http.Request",
                bind: "json.NewDecoder(r.Body).Decode",
                json: "json.NewEncoder(w).Encode",
                router: "*mux.Router",
                start: "mux.NewRouter()",
                other_imports: "\t\"encoding/json\"\n\t\"net/http\"",
                full_context: "w http.ResponseWriter, r *http.Request",
                to_the_client: "json.NewEncoder(w).Encode(",
                import_handler: "\t\"encoding/json\"\n\t\"net/http\"",
                import_router: "\t\"net/http\"\n\n\t\"github.com/gorilla/mux\"",
                ..FrameworkConfig::default()
            },
        }
    }

    /// Compose the route-group registration snippet for one entity.
    ///
    /// Pure function of its three string inputs: identical arguments always
    /// yield byte-identical output. Frameworks without grouped routing (echo,
    /// fiber, mux register routes directly in their router templates) return
    /// an empty string.
    pub fn route_group(&self, entity: &str, verb: &str, lower_entity: &str) -> String {
        match self {
            Self::Gin => format!(
                "\tapi := r.Group(\"/api/v1\")\n\t{{\n\t\t{lower} := api.Group(\"/{lower}\")\n\t\t{{\n\t\t\t{lower}.{verb}(\"\", handler.Get{entity}s)\n\t\t}}\n\t}}",
                lower = lower_entity,
                verb = verb,
                entity = entity,
            ),
            Self::Chi => format!(
                "\tr.Group(func(r chi.Router) {{\n\t\tr.{verb}(\"/{lower}\", handler.Get{entity}s)\n\t}})",
                lower = lower_entity,
                verb = verb,
                entity = entity,
            ),
            Self::Echo | Self::Fiber | Self::Mux => String::new(),
        }
    }
}

impl FrameworkConfig {
    /// Registry lookup by identifier. Unknown identifiers yield the empty
    /// config — callers treat that as "feature not applied", never a failure.
    pub fn for_id(id: &str) -> Self {
        RouterKind::parse(id).map(|k| k.fragments()).unwrap_or_default()
    }
}
