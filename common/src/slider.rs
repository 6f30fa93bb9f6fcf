//! 比較スライダーのコアロジック
//!
//! ポインタ座標から分割位置（コンテナ幅に対する百分率）への変換と、
//! マウス/タッチが混在したときのドラッグ主導権の管理。
//! DOMに依存しないためホスト側でそのままテストできる。

/// マウント時の初期位置（%）
pub const DEFAULT_POSITION: f64 = 50.0;

/// キーボード操作1回あたりの移動量（%）
pub const KEY_STEP: f64 = 5.0;

/// ポインタのX座標から分割位置を計算
///
/// `clamp(100 * (x - left) / width, 0, 100)`。
/// コンテナ幅が0以下（未レイアウト）の場合は `None` を返し、
/// 呼び出し側は直前の位置を維持する。
pub fn position_from_pointer(pointer_x: f64, container_left: f64, container_width: f64) -> Option<f64> {
    if container_width <= 0.0 {
        return None;
    }
    let position = 100.0 * (pointer_x - container_left) / container_width;
    Some(position.clamp(0.0, 100.0))
}

/// キーボードステップ適用（[0, 100] にクランプ）
pub fn step_position(position: f64, delta: f64) -> f64 {
    (position + delta).clamp(0.0, 100.0)
}

/// ドラッグの入力ソース
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Pointer,
    Touch,
}

/// ドラッグジェスチャの状態機械
///
/// 状態は {Idle, Dragging} の2つ。主導権を持つのは直近に
/// start イベントを発火したソースのみで、終了イベントは
/// 同じソースからのものだけが有効。これによりマウスとタッチの
/// イベントが交錯しても位置が壊れない。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragGesture {
    active: Option<DragSource>,
}

impl DragGesture {
    pub fn new() -> Self {
        DragGesture { active: None }
    }

    /// start イベント: このソースが主導権を取る
    pub fn begin(&mut self, source: DragSource) {
        self.active = Some(source);
    }

    /// end イベント: 主導権を持つソースからのみ有効
    pub fn end(&mut self, source: DragSource) {
        if self.active == Some(source) {
            self.active = None;
        }
    }

    /// move イベントを受け付けるか
    pub fn accepts(&self, source: DragSource) -> bool {
        self.active == Some(source)
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }
}
