/// Declares a closed set of fixed strings as an enum, each variant carrying
/// the exact text the tracker expects.
///
/// ```ignore
/// vocabulary! {
///     pub enum Label {
///         Translating => "正在翻译",
///     }
/// }
/// assert_eq!(Label::Translating.text(), "正在翻译");
/// ```
#[macro_export]
macro_rules! vocabulary {
	($(#[$meta: meta])* $visibility: vis enum $name: ident { $($(#[$entrymeta: meta])* $entryname: ident => $text: expr),* $(,)? }) => {
		$(#[$meta])*
		#[derive(strum_macros::EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
		$visibility enum $name {
			$($(#[$entrymeta])* $entryname),*
		}

		impl $name {
			pub fn text(self) -> &'static str {
				match self {
					$(
						Self::$entryname => $text
					),*
				}
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.text())
			}
		}
	};
}
