/// Token cursor and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming significant tokens while routing trivia into the
///   open phrase (`peek`, `next`, `hidden`)
/// - Matching / expecting token kinds (`optional`, `expect`, `expect_one_of`)
/// - Phrase-stack plumbing (`start`, `end`, `push_child`, `set_top_kind`)
/// - Error recovery (`error`, `skip_until`, `default_sync_strategy`) and
///   the generic `list` / `delimited_list` drivers with their
///   resynchronization sets
impl Parser {
    // ========================================================================
    // Phrase stack
    // ========================================================================

    /// Open a phrase of the given kind. Unless `do_not_push_hidden_to_parent`
    /// is set, pending trivia is first flushed into the enclosing phrase so
    /// that trivia between siblings belongs to the parent.
    fn start(&mut self, kind: PhraseKind, do_not_push_hidden_to_parent: bool) {
        if !do_not_push_hidden_to_parent {
            self.hidden();
        }

        self.stack.push(Phrase::new(kind));
    }

    /// Seal and return the top phrase.
    fn end(&mut self) -> Phrase {
        self.stack.pop().expect("phrase stack underflow")
    }

    fn end_node(&mut self) -> SyntaxNode {
        SyntaxNode::Phrase(self.end())
    }

    fn push_child(&mut self, node: SyntaxNode) {
        self.stack
            .last_mut()
            .expect("no open phrase to receive child")
            .children
            .push(node);
    }

    fn top_kind(&self) -> PhraseKind {
        self.stack.last().expect("no open phrase").kind
    }

    /// Reclassify the phrase under construction. Only legal before it is
    /// sealed; kinds never change after `end`.
    fn set_top_kind(&mut self, kind: PhraseKind) {
        self.stack.last_mut().expect("no open phrase").kind = kind;
    }

    // ========================================================================
    // Token cursor
    // ========================================================================

    /// Flush pending trivia tokens into the open phrase.
    fn hidden(&mut self) {
        while self.offset < self.tokens.len() && self.tokens[self.offset].is_trivia() {
            let Some(top) = self.stack.last_mut() else {
                return;
            };
            top.children
                .push(SyntaxNode::Token(self.tokens[self.offset].clone()));
            self.offset += 1;
        }
    }

    /// Flush pending trivia tokens into a sealed phrase; used once at the
    /// end of a parse to attach trailing trivia to the root.
    fn hidden_into(&mut self, phrase: &mut Phrase) {
        while self.offset < self.tokens.len() && self.tokens[self.offset].is_trivia() {
            phrase
                .children
                .push(SyntaxNode::Token(self.tokens[self.offset].clone()));
            self.offset += 1;
        }
    }

    /// Consume the next significant token. Trivia on the way is routed into
    /// the open phrase; the token itself is appended too unless
    /// `do_not_push` is set (callers that keep the token as a standalone
    /// node set it). The `EndOfFile` token is returned but never appended.
    fn next(&mut self, do_not_push: bool) -> Token {
        loop {
            if self.offset >= self.tokens.len() {
                return self
                    .tokens
                    .last()
                    .expect("token buffer ends with EndOfFile")
                    .clone();
            }

            let token = self.tokens[self.offset].clone();
            self.offset += 1;

            if token.kind == TokenKind::EndOfFile {
                return token;
            }

            if token.is_trivia() {
                self.push_child(SyntaxNode::Token(token));
                continue;
            }

            if !do_not_push {
                self.push_child(SyntaxNode::Token(token.clone()));
            }

            return token;
        }
    }

    /// Buffer index of the n-th significant token ahead (0 = next).
    fn peek_index(&self, n: usize) -> usize {
        let mut remaining = n + 1;
        let mut pos = self.offset;

        loop {
            if pos >= self.tokens.len() {
                return self.tokens.len() - 1;
            }

            let token = &self.tokens[pos];
            if !token.is_trivia() {
                remaining -= 1;
            }

            if token.kind == TokenKind::EndOfFile || remaining == 0 {
                return pos;
            }

            pos += 1;
        }
    }

    /// The n-th significant token ahead without consuming anything.
    fn peek(&self, n: usize) -> &Token {
        &self.tokens[self.peek_index(n)]
    }

    /// Consume the next token if it has the given kind. A match resolves
    /// any pending recovery.
    fn optional(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek(0).kind == kind {
            self.recovering = false;

            return Some(self.next(false));
        }

        None
    }

    fn optional_one_of(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.contains(&self.peek(0).kind) {
            self.recovering = false;

            return Some(self.next(false));
        }

        None
    }

    /// Consume a token of the given kind or record a recovery event.
    ///
    /// A missing `;` directly before a closing tag is tolerated: the
    /// closing tag acts as the statement terminator and is returned without
    /// being consumed. On a genuine mismatch, if the very next significant
    /// token matches, it is resynchronized to by skipping a single token.
    fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        let ahead = self.peek(0).kind;

        if ahead == kind {
            self.recovering = false;

            return Some(self.next(false));
        }

        if kind == TokenKind::Semicolon && ahead == TokenKind::CloseTag {
            // implicit end of statement
            return Some(self.peek(0).clone());
        }

        self.error(Some(kind));
        if self.peek(1).kind == kind {
            self.skip_until(|token| token.kind == kind);
            self.recovering = false;

            return Some(self.next(false));
        }

        None
    }

    /// Multi-alternative form of [`Parser::expect`].
    fn expect_one_of(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        let ahead = self.peek(0).kind;

        if kinds.contains(&ahead) {
            self.recovering = false;

            return Some(self.next(false));
        }

        if kinds.contains(&TokenKind::Semicolon) && ahead == TokenKind::CloseTag {
            // implicit end of statement
            return Some(self.peek(0).clone());
        }

        self.error(None);
        if kinds.contains(&self.peek(1).kind) {
            self.skip_until(|token| kinds.contains(&token.kind));
            self.recovering = false;

            return Some(self.next(false));
        }

        None
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    /// Record a recovery event for the token at the cursor, unless one is
    /// already pending: only the first mismatch of an unresolved error is
    /// recorded, later ones are suppressed until a match resets the state.
    fn error(&mut self, expected: Option<TokenKind>) {
        if self.recovering {
            return;
        }

        self.recovering = true;
        let error = ErrorPhrase::new(self.peek(0).clone(), expected);
        self.push_child(SyntaxNode::Error(error));
    }

    /// Skip tokens until the predicate matches or end of input; skipped
    /// tokens become children of the pending error phrase.
    fn skip_until(&mut self, predicate: impl Fn(&Token) -> bool) {
        while self.offset < self.tokens.len() {
            let token = &self.tokens[self.offset];
            if predicate(token) || token.kind == TokenKind::EndOfFile {
                break;
            }

            let token = token.clone();
            self.offset += 1;
            self.push_skipped(token);
        }
    }

    /// Skip tokens until the cursor reaches a buffer index obtained from
    /// [`Parser::peek_index`].
    fn skip_to_index(&mut self, index: usize) {
        while self.offset < index && self.offset < self.tokens.len() {
            let token = self.tokens[self.offset].clone();
            if token.kind == TokenKind::EndOfFile {
                break;
            }

            self.offset += 1;
            self.push_skipped(token);
        }
    }

    /// Append a skipped token to the pending error phrase. When no error
    /// phrase is reachable (the phrase that held it was sealed), the token
    /// stays in the enclosing phrase so the tree still round-trips.
    fn push_skipped(&mut self, token: Token) {
        let slot = self
            .stack
            .iter_mut()
            .rev()
            .find_map(|phrase| match phrase.children.last_mut() {
                Some(SyntaxNode::Error(error)) => Some(error),
                _ => None,
            });

        match slot {
            Some(error) => error.children.push(token),
            None => self.push_child(SyntaxNode::Token(token)),
        }
    }

    /// Skip to the nearest token in the union of every resynchronization
    /// set currently on the recovery stack.
    fn default_sync_strategy(&mut self) {
        let merged: Vec<TokenKind> = self
            .recover_set_stack
            .iter()
            .flatten()
            .copied()
            .collect();

        self.skip_until(|token| merged.contains(&token.kind));
    }

    // ========================================================================
    // List drivers
    // ========================================================================

    /// Parse a run of elements recognized by `element_start`. The list's
    /// resynchronization set (its recover set plus break tokens) is pushed
    /// for the duration, and a failed element gets one resync attempt
    /// before the list gives up.
    fn list(
        &mut self,
        kind: PhraseKind,
        mut element: impl FnMut(&mut Self) -> SyntaxNode,
        element_start: fn(&Token) -> bool,
        break_on: Option<&[TokenKind]>,
        recover_set: Option<&[TokenKind]>,
    ) -> Phrase {
        self.start(kind, false);

        let mut recovery_attempted = false;
        let mut list_recover_set: Vec<TokenKind> =
            recover_set.map(<[TokenKind]>::to_vec).unwrap_or_default();
        if let Some(break_on) = break_on {
            list_recover_set.extend_from_slice(break_on);
        }
        self.recover_set_stack.push(list_recover_set);

        loop {
            let token = self.peek(0).clone();

            if element_start(&token) {
                recovery_attempted = false;
                let node = element(self);
                self.push_child(node);
            } else if break_on.is_none_or(|kinds| kinds.contains(&token.kind))
                || recovery_attempted
            {
                break;
            } else {
                self.error(None);
                // attempt to sync with the token stream
                let ahead_index = self.peek_index(1);
                let ahead = self.tokens[ahead_index].clone();
                if element_start(&ahead)
                    || break_on.is_some_and(|kinds| kinds.contains(&ahead.kind))
                {
                    self.skip_to_index(ahead_index);
                } else {
                    self.default_sync_strategy();
                }
                recovery_attempted = true;
            }
        }

        self.recover_set_stack.pop();

        self.end()
    }

    /// Parse delimiter-separated elements. A missing delimiter yields one
    /// error and an attempt to resume at the next well-formed element
    /// before falling back to the shared resynchronization stack.
    fn delimited_list(
        &mut self,
        kind: PhraseKind,
        mut element: impl FnMut(&mut Self) -> SyntaxNode,
        element_start: fn(&Token) -> bool,
        delimiter: TokenKind,
        break_on: Option<&[TokenKind]>,
        do_not_push_hidden_to_parent: bool,
    ) -> Phrase {
        self.start(kind, do_not_push_hidden_to_parent);

        let mut recover_set: Vec<TokenKind> =
            break_on.map(<[TokenKind]>::to_vec).unwrap_or_default();
        recover_set.push(delimiter);
        self.recover_set_stack.push(recover_set);

        loop {
            let node = element(self);
            self.push_child(node);

            let token = self.peek(0).clone();

            if token.kind == delimiter {
                self.next(false);
            } else if break_on.is_none_or(|kinds| kinds.contains(&token.kind)) {
                break;
            } else {
                self.error(None);
                // check for a missing delimiter first
                if element_start(&token) {
                    continue;
                }
                if break_on.is_some() {
                    self.default_sync_strategy();
                    if self.peek(0).kind == delimiter {
                        continue;
                    }
                }

                break;
            }
        }

        self.recover_set_stack.pop();

        self.end()
    }
}
