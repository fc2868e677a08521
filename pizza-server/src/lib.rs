//! pizza-server - 披萨订单状态服务
//!
//! A small REST service that tracks pizza orders in PostgreSQL.
//!
//! # 模块结构
//!
//! ```text
//! pizza-server/src/
//! ├── api/       # HTTP 路由和处理器
//! ├── db/        # OrderStore trait + PostgreSQL / in-memory backends
//! ├── config.rs  # 环境变量配置
//! ├── error.rs   # ServiceError → AppError
//! ├── logger.rs  # tracing 初始化
//! ├── server.rs  # 监听与优雅关闭
//! └── state.rs   # AppState
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod server;
pub mod state;

// Re-export 公共类型
pub use config::{Config, StoreBackend};
pub use db::{MemoryOrderStore, OrderStore, PgOrderStore, StoreError};
pub use error::{ServiceError, ServiceResult};
pub use logger::init_logger;
pub use state::AppState;
