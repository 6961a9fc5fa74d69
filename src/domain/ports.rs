use crate::domain::model::RenderedPage;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 判斷資產（logo）是否存在。失敗一律視為不存在。
pub trait AssetProbe: Send + Sync {
    fn exists(&self, path: &str) -> bool;
    fn resolve(&self, path: &str) -> std::path::PathBuf;
}

/// 將頁面描述樹轉為輸出文件
pub trait Renderer: Send + Sync {
    fn format(&self) -> &'static str;
    fn file_name(&self) -> &str;
    fn render(&self, page: &RenderedPage) -> Result<String>;
}
