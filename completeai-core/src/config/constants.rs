/// Base URL constants to avoid hardcoding throughout the codebase
pub mod urls {
    pub const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";
}

/// Model ID constants for the OpenRouter catalog
pub mod models {
    // OpenRouter models (extensible via completeai.toml)
    pub mod openrouter {
        pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.3-8b-instruct:free";
        pub const SUPPORTED_MODELS: &[&str] = &[
            "meta-llama/llama-3.3-8b-instruct:free",
            "meta-llama/llama-3.3-70b-instruct",
            "qwen/qwen3-coder",
            "deepseek/deepseek-chat-v3.1",
            "x-ai/grok-code-fast-1",
        ];

        // Convenience constants for commonly used models
        pub const LLAMA_3_3_8B_INSTRUCT_FREE: &str = "meta-llama/llama-3.3-8b-instruct:free";
        pub const LLAMA_3_3_70B_INSTRUCT: &str = "meta-llama/llama-3.3-70b-instruct";
        pub const QWEN3_CODER: &str = "qwen/qwen3-coder";
        pub const DEEPSEEK_CHAT_V3_1: &str = "deepseek/deepseek-chat-v3.1";
        pub const X_AI_GROK_CODE_FAST_1: &str = "x-ai/grok-code-fast-1";
    }
}

/// Completion policy constants
pub mod completion {
    /// Lines of trailing context kept by the engine
    pub const DEFAULT_CONTEXT_WINDOW: usize = 10;

    /// Wider window used by editor integrations
    pub const EDITOR_CONTEXT_WINDOW: usize = 50;

    /// Output token cap; completions should stay short
    pub const DEFAULT_MAX_TOKENS: u32 = 50;

    /// Low temperature for more deterministic completions
    pub const DEFAULT_TEMPERATURE: f32 = 0.1;
}

/// Message role string constants
pub mod message_roles {
    pub const SYSTEM: &str = "system";
    pub const USER: &str = "user";
    pub const ASSISTANT: &str = "assistant";
}

/// Project-level defaults
pub mod defaults {
    pub const CONFIG_FILE: &str = "completeai.toml";

    /// Identification headers sent with OpenRouter requests
    pub const HTTP_REFERER: &str = "https://github.com/completeai/completeai";
    pub const X_TITLE: &str = "completeai";
}
