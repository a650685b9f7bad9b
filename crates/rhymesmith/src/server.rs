//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes rhyme detection and suggestion to AI assistants over stdio. Each
//! tool delegates to the same core engine the CLI commands use and returns
//! pretty-printed JSON.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use rhymesmith_core::{
    Config, Language, Mood, RhymeEngine, SuggestOptions, SuggestionRanker,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `detect_rhymes` and `rhyme_scheme` tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct LyricParams {
    /// Lyric text, one line per verse line.
    pub text: String,
    /// Language code (en, it, es, fr, de). Unknown codes use generic rules.
    pub language: Option<String>,
}

/// Parameters for the `suggest_rhymes` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestRhymesParams {
    /// Word to find rhymes for.
    pub word: String,
    /// Language code.
    pub language: Option<String>,
    /// Emotional tone: "positive", "negative" or "neutral".
    pub mood: Option<String>,
    /// Maximum number of suggestions.
    pub max_results: Option<usize>,
    /// Surrounding lyric text.
    pub context: Option<String>,
}

/// Parameters for the `compare_words` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompareWordsParams {
    /// First word.
    pub word1: String,
    /// Second word.
    pub word2: String,
    /// Language code.
    pub language: Option<String>,
}

/// Parameters for the `transliterate` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TransliterateParams {
    /// Words to render.
    pub words: Vec<String>,
    /// Language code.
    pub language: Option<String>,
}

/// MCP server exposing the rhyme engine to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    engine: RhymeEngine,
    ranker: SuggestionRanker,
    language: Language,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with default configuration.
    pub fn new() -> Self {
        Self::from_config(&Config::default(), None)
    }

    /// Create a server from loaded configuration.
    pub fn from_config(config: &Config, max_input_bytes: Option<usize>) -> Self {
        let tables = Arc::new(config.build_tables());
        Self {
            tool_router: Self::tool_router(),
            engine: RhymeEngine::from_config(config, Arc::clone(&tables)),
            ranker: SuggestionRanker::new(tables).with_options(SuggestOptions::from_config(config)),
            language: config.language(),
            max_input_bytes,
        }
    }

    fn language(&self, code: Option<&str>) -> Language {
        code.map_or(self.language, Language::from_code)
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "default_language": self.language.as_str(),
            "languages": Language::SUPPORTED.iter().map(Language::as_str).collect::<Vec<_>>(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Find rhyme groups in lyric text.
    #[tool(
        description = "Find rhyming words in lyrics. Returns groups of line-ending and internal rhymes with type, strength and word positions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn detect_rhymes(
        &self,
        Parameters(params): Parameters<LyricParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "detect_rhymes", language = ?params.language, "executing MCP tool");
        self.check_size(&params.text)?;

        let language = self.language(params.language.as_deref());
        let groups = self.engine.detect_rhymes(&params.text, language);

        let json = serde_json::to_string_pretty(&groups)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "detect_rhymes", groups = groups.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Rhyme scheme of lyric text.
    #[tool(
        description = "Compute the rhyme scheme of lyrics (e.g. AABB). Returns one symbol per line, the pattern string and the rhyme groups."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn rhyme_scheme(
        &self,
        Parameters(params): Parameters<LyricParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "rhyme_scheme", language = ?params.language, "executing MCP tool");
        self.check_size(&params.text)?;

        let language = self.language(params.language.as_deref());
        let analysis = self
            .engine
            .analyze(&params.text, language)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let json = serde_json::to_string_pretty(&analysis)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "rhyme_scheme",
            pattern = %analysis.pattern,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Ranked rhyme suggestions.
    #[tool(
        description = "Suggest rhymes for a word, ranked perfect, near, slant, then eye rhymes. Optionally filter by mood (positive, negative, neutral)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", word = %params.word))]
    fn suggest_rhymes(
        &self,
        Parameters(params): Parameters<SuggestRhymesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "suggest_rhymes",
            mood = ?params.mood,
            max_results = ?params.max_results,
            "executing MCP tool"
        );

        let mood = params
            .mood
            .as_deref()
            .map(str::parse::<Mood>)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let ranker = match params.max_results {
            Some(0) => {
                return Err(McpError::invalid_params(
                    "max_results must be at least 1".to_string(),
                    None,
                ));
            }
            Some(max_results) => self.ranker.clone().with_options(SuggestOptions {
                max_results,
                ..*self.ranker.options()
            }),
            None => self.ranker.clone(),
        };

        let language = self.language(params.language.as_deref());
        let suggestions =
            ranker.suggest(&params.word, language, mood, params.context.as_deref());

        let json = serde_json::to_string_pretty(&suggestions)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "suggest_rhymes",
            count = suggestions.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Compare two words.
    #[tool(
        description = "Check whether two words rhyme. Returns both phonetic renderings, whether they rhyme, and the rhyme type and strength."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn compare_words(
        &self,
        Parameters(params): Parameters<CompareWordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "compare_words", word1 = %params.word1, word2 = %params.word2, "executing MCP tool");

        let language = self.language(params.language.as_deref());
        let comparison = self
            .engine
            .compare_words(&params.word1, &params.word2, language);

        let json = serde_json::to_string_pretty(&comparison)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "compare_words", rhyme = comparison.rhyme, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Phonetic rendering of words.
    #[tool(
        description = "Show the approximate phonetic rendering, stress tail and rhyme key of each word."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn transliterate(
        &self,
        Parameters(params): Parameters<TransliterateParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "transliterate", words = params.words.len(), "executing MCP tool");

        let language = self.language(params.language.as_deref());
        let rendered: Vec<_> = params
            .words
            .iter()
            .map(|word| self.engine.transliterate(word, language))
            .collect();

        let json = serde_json::to_string_pretty(&rendered)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "transliterate", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use detect_rhymes or rhyme_scheme on lyric text, suggest_rhymes for a word, and compare_words to check a pair.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
