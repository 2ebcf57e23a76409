//! # 選択イベントバス
//!
//! 性別・パターン選択イベントの型付きブロードキャストチャネル。
//!
//! ## 設計方針
//!
//! - **型付きイベント**: 文字列ベースのイベント名ではなく
//!   [`SelectionEvent`] の閉じた直和型を流す
//! - **fire-and-forget**: 購読者がいなくても publish は失敗しない
//! - **遅延購読耐性**: 各購読者は自身の [`SelectionState`] を
//!   reducer（`SelectionState::apply`）で畳み込むため、
//!   同じイベント列を受け取った購読者は同じ状態に収束する

use drvclinic_domain::selection::SelectionEvent;
use tokio::sync::broadcast;

/// デフォルトのチャネル容量
const DEFAULT_CAPACITY: usize = 16;

/// 選択イベントのブロードキャストバス
///
/// `tokio::sync::broadcast` をラップし、公開・購読の API を
/// [`SelectionEvent`] に限定する。
#[derive(Clone)]
pub struct SelectionBus {
    sender: broadcast::Sender<SelectionEvent>,
}

impl SelectionBus {
    /// 指定した容量でバスを作成する
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// イベントを公開する
    ///
    /// 受信した購読者数を返す。購読者がいない場合は 0 を返し、
    /// エラーにはしない（fire-and-forget）。
    pub fn publish(&self, event: SelectionEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// 新しい購読者を作成する
    ///
    /// 購読開始以降に公開されたイベントのみを受信する。
    pub fn subscribe(&self) -> broadcast::Receiver<SelectionEvent> {
        self.sender.subscribe()
    }
}

impl Default for SelectionBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
