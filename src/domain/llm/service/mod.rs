pub mod llm_chat_service;
